//! Bit-addressable cursors over octet stores.
//!
//! The codecs never touch bytes directly in single-value mode; they talk to a
//! `BitWriter` or `BitReader`. Bits are ordered most-significant-first within each
//! byte, and a field written with `write_bits(value, n)` lands as the low `n` bits
//! of `value`, highest of those first.
//!
//! Every cursor has a per-call ceiling (`max_bits`). Callers that need wider
//! fields split them into several calls; see `kernels::thompson_alpha`.

use crate::error::{CodecError, Result};

pub mod memory;
pub mod stream;

pub use memory::{MemoryBitReader, MemoryBitWriter};
pub use stream::{StreamBitReader, StreamBitWriter};

/// The widest field any cursor in this crate accepts in a single call.
pub const MAX_BITS_PER_CALL: u32 = 64;

/// A sink that accepts fields of up to `max_bits()` bits per call.
pub trait BitWriter {
    /// Largest `count` accepted by a single `write_bits` call.
    fn max_bits(&self) -> u32;

    /// Appends the low `count` bits of `value`, most-significant first.
    fn write_bits(&mut self, value: u64, count: u32) -> Result<()>;
}

/// A source that yields fields of up to `max_bits()` bits per call.
pub trait BitReader {
    /// Largest `count` accepted by a single `read_bits` call.
    fn max_bits(&self) -> u32;

    /// Reads the next `count` bits as an unsigned integer, first bit most significant.
    fn read_bits(&mut self, count: u32) -> Result<u64>;
}

#[inline]
fn low_mask(count: u32) -> u64 {
    u64::MAX >> (64 - count)
}

/// Writes the low `count` bits of `value` (`count <= 64`), splitting the field into
/// as many calls as the writer's `max_bits` requires. Each call takes the
/// most-significant slice still pending, so the bit layout is the same as a
/// single wide write.
pub fn write_field(writer: &mut dyn BitWriter, value: u64, count: u32) -> Result<()> {
    let mut remaining = count;
    while remaining > 0 {
        let load = remaining.min(writer.max_bits());
        remaining -= load;
        writer.write_bits((value >> remaining) & low_mask(load), load)?;
    }
    Ok(())
}

/// Reads a `count`-bit field (`count <= 64`) written by [`write_field`], in the
/// same chunk order.
pub fn read_field(reader: &mut dyn BitReader, count: u32) -> Result<u64> {
    let mut value = 0u64;
    let mut remaining = count;
    while remaining > 0 {
        let load = remaining.min(reader.max_bits());
        remaining -= load;
        value |= reader.read_bits(load)? << remaining;
    }
    Ok(value)
}

/// Validates a cursor's configured per-call limit.
pub(crate) fn check_max_bits(max_bits: u32) -> Result<u32> {
    if max_bits == 0 || max_bits > MAX_BITS_PER_CALL {
        return Err(CodecError::Configuration(format!(
            "Cursor max bits must be between 1 and {}, not {}.",
            MAX_BITS_PER_CALL, max_bits
        )));
    }
    Ok(max_bits)
}

/// Rejects a single call that asks for more bits than the cursor allows.
pub(crate) fn check_count(count: u32, max_bits: u32) -> Result<()> {
    if count > max_bits {
        return Err(CodecError::InvalidBitCount {
            count,
            max: max_bits,
        });
    }
    Ok(())
}
