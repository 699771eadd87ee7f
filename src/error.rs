// In: src/error.rs

//! This module defines the single, unified error type for the entire codec library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Note that running out of buffer space during a *chunked* compress/decompress is
//! not an error: those calls report it through their `bool` result instead.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    // =========================================================================
    // === Construction & Range Errors
    // =========================================================================
    /// A codec was constructed with parameters it cannot honour.
    #[error("Invalid codec configuration: {0}")]
    Configuration(String),

    /// The value cannot be represented with the codec's configured capacity.
    /// No bits are written when this is returned.
    #[error("Value {value} is greater than maximum of {max}. Increase length bits to support larger numbers.")]
    OutOfRange { value: u64, max: u64 },

    // =========================================================================
    // === Sink / Source Errors
    // =========================================================================
    #[error("Buffer too small: {required} slots required, {available} available")]
    BufferTooSmall { required: usize, available: usize },

    #[error("Unexpected end of input (truncated data)")]
    UnexpectedEndOfInput,

    #[error("Integer overflow during decoding: value exceeds 64 bits")]
    Overflow,

    #[error("Bit count {count} is outside the cursor's per-call limit of {max}")]
    InvalidBitCount { count: u32, max: u32 },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem of a stream-backed cursor.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library while reading a codec configuration.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_states_bound() {
        let err = CodecError::OutOfRange { value: 3, max: 2 };
        let msg = err.to_string();
        assert!(msg.contains("maximum of 2"));
        assert!(msg.contains("Value 3"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CodecError = io.into();
        assert!(matches!(err, CodecError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
