//! Small helpers for inspecting encoded output.

/// Renders bytes as space-separated 8-digit binary groups, e.g. `"00000000 10000000"`.
pub fn to_binary_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the format produced by [`to_binary_string`]. Whitespace is ignored and
/// the digit count must be a multiple of eight. Returns `None` on malformed input.
pub fn parse_binary_string(text: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 8 != 0 {
        return None;
    }
    digits
        .chunks(8)
        .map(|chunk| {
            chunk.iter().try_fold(0u8, |acc, &digit| match digit {
                b'0' => Some(acc << 1),
                b'1' => Some((acc << 1) | 1),
                _ => None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_string_roundtrip() {
        let bytes = vec![0x00, 0x80, 0x7F, 0xA5];
        let text = to_binary_string(&bytes);
        assert_eq!(text, "00000000 10000000 01111111 10100101");
        assert_eq!(parse_binary_string(&text), Some(bytes));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_binary_string(""), Some(vec![]));
        assert_eq!(parse_binary_string("0101"), None);
        assert_eq!(parse_binary_string("0000000x"), None);
    }
}
