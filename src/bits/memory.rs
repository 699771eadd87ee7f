//! In-memory bit cursors backed by `bitvec`.
//!
//! `MemoryBitWriter` grows a `BitVec<u8, Msb0>` and hands back the packed bytes
//! (final byte zero-padded). `MemoryBitReader` walks a borrowed byte slice.

use bitvec::prelude::*;

use super::{check_count, check_max_bits, BitReader, BitWriter, MAX_BITS_PER_CALL};
use crate::error::{CodecError, Result};

//==================================================================================
// 1. Writer
//==================================================================================

#[derive(Debug, Clone)]
pub struct MemoryBitWriter {
    bits: BitVec<u8, Msb0>,
    max_bits: u32,
}

impl Default for MemoryBitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBitWriter {
    pub fn new() -> Self {
        Self {
            bits: BitVec::new(),
            max_bits: MAX_BITS_PER_CALL,
        }
    }

    /// Creates a writer that refuses fields wider than `max_bits` per call.
    pub fn with_max_bits(max_bits: u32) -> Result<Self> {
        Ok(Self {
            bits: BitVec::new(),
            max_bits: check_max_bits(max_bits)?,
        })
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Consumes the writer, returning the packed bytes. Unused low bits of the
    /// final byte are zero.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}

impl BitWriter for MemoryBitWriter {
    fn max_bits(&self) -> u32 {
        self.max_bits
    }

    fn write_bits(&mut self, value: u64, count: u32) -> Result<()> {
        check_count(count, self.max_bits)?;
        if count == 0 {
            return Ok(());
        }
        let field = &value.view_bits::<Msb0>()[(64 - count) as usize..];
        self.bits.extend_from_bitslice(field);
        Ok(())
    }
}

//==================================================================================
// 2. Reader
//==================================================================================

#[derive(Debug, Clone)]
pub struct MemoryBitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
    max_bits: u32,
}

impl<'a> MemoryBitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: BitSlice::from_slice(bytes),
            position: 0,
            max_bits: MAX_BITS_PER_CALL,
        }
    }

    pub fn with_max_bits(bytes: &'a [u8], max_bits: u32) -> Result<Self> {
        Ok(Self {
            bits: BitSlice::from_slice(bytes),
            position: 0,
            max_bits: check_max_bits(max_bits)?,
        })
    }

    /// Current bit offset from the start of the slice.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }
}

impl BitReader for MemoryBitReader<'_> {
    fn max_bits(&self) -> u32 {
        self.max_bits
    }

    fn read_bits(&mut self, count: u32) -> Result<u64> {
        check_count(count, self.max_bits)?;
        let end = self.position + count as usize;
        if end > self.bits.len() {
            return Err(CodecError::UnexpectedEndOfInput);
        }

        let value = self.bits[self.position..end]
            .iter()
            .by_vals()
            .fold(0u64, |acc, bit| (acc << 1) | bit as u64);

        self.position = end;
        Ok(value)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_msb_first() {
        let mut writer = MemoryBitWriter::new();
        writer.write_bits(0b1010, 4).unwrap();
        writer.write_bits(0b11, 2).unwrap();
        assert_eq!(writer.bit_len(), 6);
        assert_eq!(writer.into_bytes(), vec![0b1010_1100]);
    }

    #[test]
    fn test_full_width_field_roundtrip() {
        let mut writer = MemoryBitWriter::new();
        writer.write_bits(u64::MAX - 5, 64).unwrap();
        writer.write_bits(1, 1).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 9);

        let mut reader = MemoryBitReader::new(&bytes);
        assert_eq!(reader.read_bits(64).unwrap(), u64::MAX - 5);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.position(), 65);
    }

    #[test]
    fn test_write_ignores_bits_above_count() {
        let mut writer = MemoryBitWriter::new();
        writer.write_bits(0xFF, 3).unwrap();
        assert_eq!(writer.into_bytes(), vec![0b1110_0000]);
    }

    #[test]
    fn test_read_past_end_fails() {
        let bytes = [0xAB];
        let mut reader = MemoryBitReader::new(&bytes);
        assert_eq!(reader.read_bits(4).unwrap(), 0xA);
        assert!(matches!(
            reader.read_bits(5),
            Err(CodecError::UnexpectedEndOfInput)
        ));
        // A failed read does not advance the cursor.
        assert_eq!(reader.remaining(), 4);
        assert_eq!(reader.read_bits(4).unwrap(), 0xB);
    }

    #[test]
    fn test_per_call_limit_enforced() {
        let mut writer = MemoryBitWriter::with_max_bits(8).unwrap();
        assert!(matches!(
            writer.write_bits(0, 9),
            Err(CodecError::InvalidBitCount { count: 9, max: 8 })
        ));
        assert!(MemoryBitWriter::with_max_bits(0).is_err());
        assert!(MemoryBitWriter::with_max_bits(65).is_err());
    }
}
