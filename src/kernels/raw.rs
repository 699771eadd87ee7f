//! The raw codec: every value is written as a fixed 64-bit field, little-endian
//! byte order, each byte MSB-first. It never compresses and never fails on range,
//! which makes it the baseline the variable-length codecs are measured against.

use crate::bits::{read_field, write_field, BitReader, BitWriter};
use crate::error::Result;
use crate::traits::IntegerCodec;

const BYTE_BITS: u32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodec;

impl RawCodec {
    pub fn new() -> Self {
        Self
    }
}

impl IntegerCodec for RawCodec {
    fn max_value(&self) -> u64 {
        u64::MAX
    }

    fn encode_u64(&self, value: u64, writer: &mut dyn BitWriter) -> Result<()> {
        let le = value.to_le();
        for &byte in bytemuck::bytes_of(&le) {
            write_field(writer, byte as u64, BYTE_BITS)?;
        }
        Ok(())
    }

    fn decode_u64(&self, reader: &mut dyn BitReader) -> Result<u64> {
        let mut bytes = [0u8; 8];
        for byte in bytes.iter_mut() {
            *byte = read_field(reader, BYTE_BITS)? as u8;
        }
        Ok(u64::from_le(bytemuck::cast(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{StreamBitReader, StreamBitWriter};
    use std::io::Cursor;

    fn encode(value: u64) -> Vec<u8> {
        let mut writer = StreamBitWriter::new(Vec::new());
        RawCodec.encode_u64(value, &mut writer).unwrap();
        writer.finish().unwrap()
    }

    fn decode(bytes: &[u8]) -> u64 {
        let mut reader = StreamBitReader::new(Cursor::new(bytes));
        RawCodec.decode_u64(&mut reader).unwrap()
    }

    #[test]
    fn test_byte_layout() {
        assert_eq!(encode(0), vec![0; 8]);
        assert_eq!(encode(1), vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode(2), vec![2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode(3), vec![3, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode(u64::MAX), vec![0xFF; 8]);
    }

    #[test]
    fn test_decode_vectors() {
        assert_eq!(decode(&[0; 8]), 0);
        assert_eq!(decode(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
        assert_eq!(decode(&[3, 0, 0, 0, 0, 0, 0, 0]), 3);
        assert_eq!(decode(&[0xFF; 8]), RawCodec.max_value());
    }

    #[test]
    fn test_stream_roundtrip_first_1000() {
        let mut writer = StreamBitWriter::new(Vec::new());
        for value in 0..1000u64 {
            RawCodec.encode_u64(value, &mut writer).unwrap();
        }
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes.len(), 8000);

        let mut reader = StreamBitReader::new(Cursor::new(bytes));
        for value in 0..1000u64 {
            assert_eq!(RawCodec.decode_u64(&mut reader).unwrap(), value);
        }
    }
}
