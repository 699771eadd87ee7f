//! This module contains the Thompson-Alpha codec: a fixed-width length prefix
//! followed by the value's significant bits with the leading one dropped.
//!
//! Layout of one encoded value, with `v' = value + 1` and `n = bit_length(v') - 1`:
//!
//! ```text
//! [ n : length_bits ][ low n bits of v' : n ]
//! ```
//!
//! The `+ 1` offset lets zero be written as a bare prefix. Because the prefix can
//! count at most `2^length_bits - 1` payload bits, the largest encodable value is
//! `2^(2^length_bits) - 2`.

use crate::bits::{read_field, write_field, BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::traits::IntegerCodec;

pub const MIN_LENGTH_BITS: u32 = 1;
pub const MAX_LENGTH_BITS: u32 = 6;
pub const DEFAULT_LENGTH_BITS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThompsonAlpha {
    length_bits: u32,
    max_value: u64,
}

impl Default for ThompsonAlpha {
    fn default() -> Self {
        Self {
            length_bits: DEFAULT_LENGTH_BITS,
            max_value: max_value_for(DEFAULT_LENGTH_BITS),
        }
    }
}

impl ThompsonAlpha {
    /// Creates a codec whose length prefix is `length_bits` wide.
    ///
    /// # Errors
    /// `CodecError::Configuration` unless `1 <= length_bits <= 6`.
    pub fn new(length_bits: u32) -> Result<Self> {
        if !(MIN_LENGTH_BITS..=MAX_LENGTH_BITS).contains(&length_bits) {
            return Err(CodecError::Configuration(format!(
                "Length bits must be between {} and {}, not {}.",
                MIN_LENGTH_BITS, MAX_LENGTH_BITS, length_bits
            )));
        }
        Ok(Self {
            length_bits,
            max_value: max_value_for(length_bits),
        })
    }

    pub fn length_bits(&self) -> u32 {
        self.length_bits
    }
}

/// `2^(2^length_bits) - 2`, saturating at `u64::MAX - 1` for a 6-bit prefix.
fn max_value_for(length_bits: u32) -> u64 {
    let max_payload_bits = (1u32 << length_bits) - 1;
    let significant_bits = max_payload_bits + 1;
    if significant_bits >= 64 {
        u64::MAX - 1
    } else {
        (1u64 << significant_bits) - 2
    }
}

/// Number of bits needed to represent `value`, at least 1.
#[inline]
fn bit_length(value: u64) -> u32 {
    (64 - value.leading_zeros()).max(1)
}

impl IntegerCodec for ThompsonAlpha {
    fn max_value(&self) -> u64 {
        self.max_value
    }

    fn encode_u64(&self, value: u64, writer: &mut dyn BitWriter) -> Result<()> {
        // Checked before any bits go out so a rejected value leaves the sink untouched.
        if value > self.max_value {
            return Err(CodecError::OutOfRange {
                value,
                max: self.max_value,
            });
        }

        let offset = value + 1;
        let length = bit_length(offset) - 1;

        write_field(writer, length as u64, self.length_bits)?;
        // Low `length` bits only: the leading one is implied.
        write_field(writer, offset, length)?;

        log::trace!(
            "thompson-alpha: encoded {} as {}+{} bits",
            value,
            self.length_bits,
            length
        );
        Ok(())
    }

    fn decode_u64(&self, reader: &mut dyn BitReader) -> Result<u64> {
        let length = read_field(reader, self.length_bits)? as u32;
        let mut value = read_field(reader, length)?;

        // Restore the implied leading one, then undo the zero offset.
        value |= 1u64 << length;
        Ok(value - 1)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
