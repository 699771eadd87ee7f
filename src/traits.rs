//! This module defines the operation-set contract shared by every codec.
//!
//! A codec implements one 64-bit encode/decode pair against a bit cursor; the
//! narrower and signed widths are provided methods layered on top of it. Signed
//! values route through ZigZag so small magnitudes stay small. Narrow decodes
//! truncate the 64-bit result silently: a stream must be decoded at the width
//! (or a wider one) it was encoded with.

use crate::bits::{BitReader, BitWriter};
use crate::error::Result;
use crate::kernels::zigzag;

pub trait IntegerCodec {
    /// Largest unsigned value `encode_u64` accepts.
    fn max_value(&self) -> u64;

    fn encode_u64(&self, value: u64, writer: &mut dyn BitWriter) -> Result<()>;

    fn decode_u64(&self, reader: &mut dyn BitReader) -> Result<u64>;

    //------------------------------------------------------------------------------
    // Unsigned widths
    //------------------------------------------------------------------------------

    fn encode_bool(&self, value: bool, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_u64(value as u64, writer)
    }

    fn encode_u8(&self, value: u8, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_u64(value as u64, writer)
    }

    fn encode_u16(&self, value: u16, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_u64(value as u64, writer)
    }

    fn encode_u32(&self, value: u32, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_u64(value as u64, writer)
    }

    fn decode_bool(&self, reader: &mut dyn BitReader) -> Result<bool> {
        Ok(self.decode_u64(reader)? > 0)
    }

    fn decode_u8(&self, reader: &mut dyn BitReader) -> Result<u8> {
        Ok(self.decode_u64(reader)? as u8)
    }

    fn decode_u16(&self, reader: &mut dyn BitReader) -> Result<u16> {
        Ok(self.decode_u64(reader)? as u16)
    }

    fn decode_u32(&self, reader: &mut dyn BitReader) -> Result<u32> {
        Ok(self.decode_u64(reader)? as u32)
    }

    //------------------------------------------------------------------------------
    // Signed widths (ZigZag)
    //------------------------------------------------------------------------------

    fn encode_i8(&self, value: i8, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_i64(value as i64, writer)
    }

    fn encode_i16(&self, value: i16, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_i64(value as i64, writer)
    }

    fn encode_i32(&self, value: i32, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_i64(value as i64, writer)
    }

    fn encode_i64(&self, value: i64, writer: &mut dyn BitWriter) -> Result<()> {
        self.encode_u64(zigzag::encode(value), writer)
    }

    fn decode_i8(&self, reader: &mut dyn BitReader) -> Result<i8> {
        Ok(self.decode_i64(reader)? as i8)
    }

    fn decode_i16(&self, reader: &mut dyn BitReader) -> Result<i16> {
        Ok(self.decode_i64(reader)? as i16)
    }

    fn decode_i32(&self, reader: &mut dyn BitReader) -> Result<i32> {
        Ok(self.decode_i64(reader)? as i32)
    }

    fn decode_i64(&self, reader: &mut dyn BitReader) -> Result<i64> {
        Ok(zigzag::decode(self.decode_u64(reader)?))
    }
}
