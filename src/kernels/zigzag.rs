//! This module contains the pure, stateless kernels for Zig-zag encoding and decoding.
//!
//! Zig-zag is a lossless bijection from signed to unsigned 64-bit integers that
//! interleaves negatives and positives (0, -1, 1, -2, 2, ...) so that values of
//! small magnitude get small codes. Every signed entry point of the codecs routes
//! through here. Panic-free.

//==================================================================================
// 1. Core Logic
//==================================================================================

/// Maps a signed integer onto the unsigned code space.
#[inline]
pub fn encode(value: i64) -> u64 {
    // The right shift must be arithmetic so the sign fills every bit.
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`encode`].
#[inline]
pub fn decode(value: u64) -> i64 {
    let casted = value as i64;
    ((value >> 1) as i64) ^ -(casted & 1)
}

//==================================================================================
// 2. Slice Operations
//==================================================================================

pub fn encode_slice(values: &[i64]) -> Vec<u64> {
    values.iter().map(|&v| encode(v)).collect()
}

pub fn decode_slice(values: &[u64]) -> Vec<i64> {
    values.iter().map(|&v| decode(v)).collect()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
