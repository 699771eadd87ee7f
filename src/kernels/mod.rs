//! This module serves as the public API for the collection of integer codecs.
//!
//! Every codec implements `IntegerCodec` against a bit cursor. The slice helpers
//! below run any codec over a whole sequence of unsigned integers of one width.

use num_traits::{AsPrimitive, PrimInt, Unsigned};

use crate::bits::{BitReader, BitWriter};
use crate::error::Result;
use crate::traits::IntegerCodec;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Signed/unsigned bijection shared by every signed entry point.
pub mod zigzag;

/// Length-prefixed codes.
pub mod thompson_alpha;

/// Continuation-bit codes, including the chunked buffer protocol.
pub mod vlq;

/// Fixed-width baseline.
pub mod raw;

pub use raw::RawCodec;
pub use thompson_alpha::ThompsonAlpha;
pub use vlq::Vlq;


//==================================================================================
// 2. Public API for Slice Operations
//==================================================================================

/// Encodes every value of `values` in order.
pub fn encode_all<T>(codec: &dyn IntegerCodec, values: &[T], writer: &mut dyn BitWriter) -> Result<()>
where
    T: PrimInt + Unsigned + AsPrimitive<u64>,
{
    for &value in values {
        codec.encode_u64(value.as_(), writer)?;
    }
    Ok(())
}

/// Decodes `count` values, truncating each to `T`.
pub fn decode_all<T>(codec: &dyn IntegerCodec, count: usize, reader: &mut dyn BitReader) -> Result<Vec<T>>
where
    T: PrimInt + Unsigned + 'static,
    u64: AsPrimitive<T>,
{
    let mut decoded = Vec::with_capacity(count);
    for _ in 0..count {
        decoded.push(codec.decode_u64(reader)?.as_());
    }
    Ok(decoded)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{MemoryBitReader, MemoryBitWriter};

    fn all_codecs() -> Vec<Box<dyn IntegerCodec>> {
        let mut codecs: Vec<Box<dyn IntegerCodec>> = Vec::new();
        codecs.push(Box::new(ThompsonAlpha::default()));
        codecs.push(Box::new(ThompsonAlpha::new(5).unwrap()));
        codecs.push(Box::new(Vlq::new()));
        codecs.push(Box::new(RawCodec::new()));
        codecs
    }

    #[test]
    fn test_slice_roundtrip_u16_every_codec() {
        let original: Vec<u16> = vec![0, 1, 2, 127, 128, 255, 256, 16_511, 16_512, u16::MAX];
        for codec in all_codecs() {
            let mut writer = MemoryBitWriter::new();
            encode_all(codec.as_ref(), &original, &mut writer).unwrap();
            let bytes = writer.into_bytes();

            let mut reader = MemoryBitReader::new(&bytes);
            let decoded: Vec<u16> = decode_all(codec.as_ref(), original.len(), &mut reader).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_random_u64_roundtrip_every_codec() {
        let values: Vec<u64> = (0..2_000)
            .map(|i| {
                let v: u64 = rand::random();
                // Spread magnitudes across every bit length.
                v >> (i % 64)
            })
            .collect();

        for codec in all_codecs() {
            let in_range: Vec<u64> = values
                .iter()
                .copied()
                .filter(|&v| v <= codec.max_value())
                .collect();

            let mut writer = MemoryBitWriter::with_max_bits(13).unwrap();
            encode_all(codec.as_ref(), &in_range, &mut writer).unwrap();
            let bytes = writer.into_bytes();

            let mut reader = MemoryBitReader::with_max_bits(&bytes, 11).unwrap();
            let decoded: Vec<u64> = decode_all(codec.as_ref(), in_range.len(), &mut reader).unwrap();
            assert_eq!(decoded, in_range);
        }
    }

    #[test]
    fn test_random_i64_roundtrip_through_zigzag() {
        for codec in all_codecs() {
            let mut writer = MemoryBitWriter::new();
            let values: Vec<i64> = (0..500)
                .map(|i| rand::random::<i64>() >> (i % 64))
                .filter(|&v| zigzag::encode(v) <= codec.max_value())
                .collect();
            for &v in &values {
                codec.encode_i64(v, &mut writer).unwrap();
            }
            let bytes = writer.into_bytes();

            let mut reader = MemoryBitReader::new(&bytes);
            for &v in &values {
                assert_eq!(codec.decode_i64(&mut reader).unwrap(), v);
            }
        }
    }
}
