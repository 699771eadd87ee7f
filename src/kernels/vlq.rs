//! This module contains the VLQ (Variable-Length Quantity) codec.
//!
//! Each integer becomes a run of 8-bit groups, least-significant group first.
//! The low 7 bits of a group are payload; bit 7 is set only on the **last** group.
//!
//! Unlike plain base-128 (LEB128), every continuation group also carries an
//! implicit `+1` into the next group (`v = (v >> 7) - 1` while encoding). This
//! removes redundant encodings: one group covers `0..=127`, two cover
//! `128..=16511`, three cover `16512..=2113663`, and so on. A `u64` needs at most
//! [`MAX_GROUPS`] groups.
//!
//! ```text
//! 0       -> 10000000
//! 127     -> 11111111
//! 128     -> 00000000 10000000
//! 16511   -> 01111111 11111111
//! 16512   -> 00000000 00000000 10000000
//! ```
//!
//! Besides the single-value entry points, the codec offers a chunked mode that
//! moves as many whole integers as fit between two [`Buffer`]s and reports
//! through a `bool` whether it ran to completion. An incomplete call leaves both
//! buffers in a state from which the next call resumes exactly.

use crate::bits::{read_field, write_field, BitReader, BitWriter};
use crate::buffer::Buffer;
use crate::error::{CodecError, Result};
use crate::log_metric;
use crate::traits::IntegerCodec;

/// Longest encoding of any `u64`.
pub const MAX_GROUPS: usize = 10;

const LAST_GROUP: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;
const PAYLOAD_BITS: u32 = 7;
const GROUP_BITS: u32 = 8;

//==================================================================================
// 1. Group Arithmetic
//==================================================================================

/// Writes the groups for `value` into `groups`, returning how many were used.
fn encode_groups(value: u64, groups: &mut [u8; MAX_GROUPS]) -> usize {
    let mut remaining = value;
    let mut count = 0;
    while remaining > PAYLOAD_MASK as u64 {
        groups[count] = (remaining & PAYLOAD_MASK as u64) as u8;
        count += 1;
        remaining = (remaining >> PAYLOAD_BITS) - 1;
    }
    groups[count] = remaining as u8 | LAST_GROUP;
    count + 1
}

/// Number of groups `value` encodes to.
pub fn encoded_len(value: u64) -> usize {
    let mut groups = [0u8; MAX_GROUPS];
    encode_groups(value, &mut groups)
}

/// Accumulates groups one at a time until the last one arrives.
#[derive(Debug, Default)]
struct GroupDecoder {
    value: u64,
    shift: u32,
}

impl GroupDecoder {
    /// Feeds one group. Returns the finished value once `group` is the last one.
    fn push(&mut self, group: u8) -> Result<Option<u64>> {
        let payload = (group & PAYLOAD_MASK) as u64;
        if payload > u64::MAX >> self.shift {
            return Err(CodecError::Overflow);
        }
        self.value = self
            .value
            .checked_add(payload << self.shift)
            .ok_or(CodecError::Overflow)?;

        if group & LAST_GROUP != 0 {
            return Ok(Some(self.value));
        }

        // Every continuation group lifts the next group's range by one step.
        self.shift += PAYLOAD_BITS;
        if self.shift >= u64::BITS {
            return Err(CodecError::Overflow);
        }
        self.value = self
            .value
            .checked_add(1u64 << self.shift)
            .ok_or(CodecError::Overflow)?;
        Ok(None)
    }
}

/// Decodes one integer from the front of `bytes`. Returns the value and the
/// number of bytes it occupied, or `None` if `bytes` ends before a last group.
fn decode_groups(bytes: &[u8]) -> Result<Option<(u64, usize)>> {
    let mut decoder = GroupDecoder::default();
    for (index, &group) in bytes.iter().enumerate() {
        if let Some(value) = decoder.push(group)? {
            return Ok(Some((value, index + 1)));
        }
    }
    Ok(None)
}

//==================================================================================
// 2. Codec
//==================================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vlq;

impl Vlq {
    pub fn new() -> Self {
        Self
    }

    //------------------------------------------------------------------------------
    // Single-value operations over a byte buffer
    //------------------------------------------------------------------------------

    /// Appends the encoding of `value` to `output`.
    ///
    /// # Errors
    /// `CodecError::BufferTooSmall` if `output` cannot take every group; nothing is
    /// written in that case.
    pub fn compress_one(&self, value: u64, output: &mut Buffer<u8>) -> Result<()> {
        let mut groups = [0u8; MAX_GROUPS];
        let count = encode_groups(value, &mut groups);
        output.enqueue_slice(&groups[..count])
    }

    /// Consumes one integer from the front of `input`. Bytes after its last group
    /// are left in place.
    ///
    /// # Errors
    /// `CodecError::UnexpectedEndOfInput` if `input` holds no complete integer
    /// (`input` is untouched), `CodecError::Overflow` if the groups exceed 64 bits.
    pub fn decompress_one(&self, input: &mut Buffer<u8>) -> Result<u64> {
        match decode_groups(input.as_slice())? {
            Some((value, consumed)) => {
                input.advance(consumed);
                Ok(value)
            }
            None => Err(CodecError::UnexpectedEndOfInput),
        }
    }

    //------------------------------------------------------------------------------
    // Chunked operations
    //------------------------------------------------------------------------------

    /// Moves integers from `input` into `output` until `input` is drained
    /// (returns `true`) or the next integer does not fit (returns `false`).
    ///
    /// An integer is only consumed once all of its groups are written. Integers
    /// moved before a `false` stay moved, so calling again after draining or
    /// resizing `output` picks up with the next integer.
    pub fn compress(&self, input: &mut Buffer<u64>, output: &mut Buffer<u8>) -> bool {
        let mut groups = [0u8; MAX_GROUPS];
        let mut consumed = 0usize;

        while let Some(value) = input.peek() {
            let count = encode_groups(value, &mut groups);
            if output.enqueue_slice(&groups[..count]).is_err() {
                log::debug!(
                    "vlq compress: output full after {} values ({} needed, {} free)",
                    consumed,
                    count,
                    output.available()
                );
                log_metric!("event"="vlq_compress", "outcome"="output_full", "consumed"=consumed);
                return false;
            }
            input.advance(1);
            consumed += 1;
        }

        log_metric!("event"="vlq_compress", "outcome"="drained", "consumed"=consumed);
        true
    }

    /// Moves whole integers from `input` into `output`.
    ///
    /// Returns `Ok(true)` once `input` is drained with no partial integer left,
    /// including when `output` fills on the very last one. Returns `Ok(false)` if
    /// `output` fills while bytes remain, or if `input` ends part-way through an
    /// integer; the partial groups stay at the front of `input` for the next call.
    ///
    /// # Errors
    /// `CodecError::Overflow` if the groups at the front of `input` exceed 64 bits.
    pub fn decompress(&self, input: &mut Buffer<u8>, output: &mut Buffer<u64>) -> Result<bool> {
        let mut produced = 0usize;

        loop {
            if input.is_empty() {
                log_metric!("event"="vlq_decompress", "outcome"="drained", "produced"=produced);
                return Ok(true);
            }
            if output.is_full() {
                log::debug!(
                    "vlq decompress: output full after {} values, {} bytes pending",
                    produced,
                    input.used()
                );
                log_metric!("event"="vlq_decompress", "outcome"="output_full", "produced"=produced);
                return Ok(false);
            }

            match decode_groups(input.as_slice())? {
                Some((value, consumed)) => {
                    output.enqueue(value)?;
                    input.advance(consumed);
                    produced += 1;
                }
                None => {
                    log::debug!(
                        "vlq decompress: {} trailing bytes hold a partial value",
                        input.used()
                    );
                    log_metric!("event"="vlq_decompress", "outcome"="partial_input", "produced"=produced);
                    return Ok(false);
                }
            }
        }
    }
}

impl IntegerCodec for Vlq {
    fn max_value(&self) -> u64 {
        u64::MAX
    }

    fn encode_u64(&self, value: u64, writer: &mut dyn BitWriter) -> Result<()> {
        let mut groups = [0u8; MAX_GROUPS];
        let count = encode_groups(value, &mut groups);
        for &group in &groups[..count] {
            write_field(writer, group as u64, GROUP_BITS)?;
        }
        Ok(())
    }

    fn decode_u64(&self, reader: &mut dyn BitReader) -> Result<u64> {
        let mut decoder = GroupDecoder::default();
        loop {
            let group = read_field(reader, GROUP_BITS)? as u8;
            if let Some(value) = decoder.push(group)? {
                return Ok(value);
            }
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_boundaries() {
        assert_eq!(encoded_len(0), 1);
        assert_eq!(encoded_len(127), 1);
        assert_eq!(encoded_len(128), 2);
        assert_eq!(encoded_len(16_511), 2);
        assert_eq!(encoded_len(16_512), 3);
        assert_eq!(encoded_len(2_113_663), 3);
        assert_eq!(encoded_len(2_113_664), 4);
        assert_eq!(encoded_len(u64::MAX), MAX_GROUPS);
    }

    #[test]
    fn test_decode_groups_reports_incomplete() {
        assert_eq!(decode_groups(&[]).unwrap(), None);
        assert_eq!(decode_groups(&[0x00]).unwrap(), None);
        assert_eq!(decode_groups(&[0x00, 0x80, 0x81]).unwrap(), Some((128, 2)));
    }

    #[test]
    fn test_overflowing_groups_rejected() {
        // Eleven groups can never be a u64.
        let mut bytes = vec![0x00; 10];
        bytes.push(0x80);
        assert!(matches!(decode_groups(&bytes), Err(CodecError::Overflow)));

        // Ten groups, but the value is past u64::MAX.
        let mut bytes = vec![0x7F; 9];
        bytes.push(0xFF);
        assert!(matches!(decode_groups(&bytes), Err(CodecError::Overflow)));
    }
}
