//! Bit cursors over `std::io` streams.
//!
//! Bits accumulate in a single pending byte that is pushed to the stream once
//! full. `StreamBitWriter::finish` must be called to emit a trailing partial byte
//! (zero-padded) and flush the stream.

use std::io::{ErrorKind, Read, Write};

use super::{check_count, check_max_bits, BitReader, BitWriter, MAX_BITS_PER_CALL};
use crate::error::{CodecError, Result};

pub struct StreamBitWriter<W: Write> {
    inner: W,
    pending: u8,
    pending_bits: u8,
    max_bits: u32,
}

impl<W: Write> StreamBitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: 0,
            pending_bits: 0,
            max_bits: MAX_BITS_PER_CALL,
        }
    }

    pub fn with_max_bits(inner: W, max_bits: u32) -> Result<Self> {
        Ok(Self {
            inner,
            pending: 0,
            pending_bits: 0,
            max_bits: check_max_bits(max_bits)?,
        })
    }

    fn push_bit(&mut self, bit: bool) -> Result<()> {
        self.pending = (self.pending << 1) | bit as u8;
        self.pending_bits += 1;
        if self.pending_bits == 8 {
            self.inner.write_all(&[self.pending])?;
            self.pending = 0;
            self.pending_bits = 0;
        }
        Ok(())
    }

    /// Writes any partial byte (low bits zero), flushes, and returns the stream.
    pub fn finish(mut self) -> Result<W> {
        if self.pending_bits > 0 {
            let byte = self.pending << (8 - self.pending_bits);
            self.inner.write_all(&[byte])?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> BitWriter for StreamBitWriter<W> {
    fn max_bits(&self) -> u32 {
        self.max_bits
    }

    fn write_bits(&mut self, value: u64, count: u32) -> Result<()> {
        check_count(count, self.max_bits)?;
        for shift in (0..count).rev() {
            self.push_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }
}

pub struct StreamBitReader<R: Read> {
    inner: R,
    current: u8,
    remaining_bits: u8,
    max_bits: u32,
}

impl<R: Read> StreamBitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            current: 0,
            remaining_bits: 0,
            max_bits: MAX_BITS_PER_CALL,
        }
    }

    pub fn with_max_bits(inner: R, max_bits: u32) -> Result<Self> {
        Ok(Self {
            inner,
            current: 0,
            remaining_bits: 0,
            max_bits: check_max_bits(max_bits)?,
        })
    }

    /// Returns the stream. Unread bits of a partially consumed byte are dropped.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_bit(&mut self) -> Result<bool> {
        if self.remaining_bits == 0 {
            let mut byte = [0u8; 1];
            self.inner.read_exact(&mut byte).map_err(|e| match e.kind() {
                ErrorKind::UnexpectedEof => CodecError::UnexpectedEndOfInput,
                _ => CodecError::Io(e),
            })?;
            self.current = byte[0];
            self.remaining_bits = 8;
        }
        self.remaining_bits -= 1;
        Ok((self.current >> self.remaining_bits) & 1 == 1)
    }
}

impl<R: Read> BitReader for StreamBitReader<R> {
    fn max_bits(&self) -> u32 {
        self.max_bits
    }

    fn read_bits(&mut self, count: u32) -> Result<u64> {
        check_count(count, self.max_bits)?;
        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.next_bit()? as u64;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_finish_pads_partial_byte() {
        let mut writer = StreamBitWriter::new(Vec::new());
        writer.write_bits(0b101, 3).unwrap();
        writer.write_bits(0xFF, 8).unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, vec![0b1011_1111, 0b1110_0000]);
    }

    #[test]
    fn test_stream_roundtrip_mixed_widths() {
        let mut writer = StreamBitWriter::new(Vec::new());
        writer.write_bits(5, 3).unwrap();
        writer.write_bits(u64::MAX, 64).unwrap();
        writer.write_bits(0, 7).unwrap();
        writer.write_bits(0x1234, 13).unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = StreamBitReader::new(Cursor::new(bytes));
        assert_eq!(reader.read_bits(3).unwrap(), 5);
        assert_eq!(reader.read_bits(64).unwrap(), u64::MAX);
        assert_eq!(reader.read_bits(7).unwrap(), 0);
        assert_eq!(reader.read_bits(13).unwrap(), 0x1234);
    }

    #[test]
    fn test_exhausted_stream_reports_end_of_input() {
        let mut reader = StreamBitReader::new(Cursor::new(vec![0x80]));
        assert_eq!(reader.read_bits(8).unwrap(), 0x80);
        assert!(matches!(
            reader.read_bits(1),
            Err(CodecError::UnexpectedEndOfInput)
        ));
    }
}
