//! This file is the root of the `tambak_intcodec` Rust crate.
//!
//! The crate maps integers to compact variable-length bit sequences and back:
//!
//! - [`ThompsonAlpha`]: a fixed-width length prefix followed by the value's bits
//!   with the leading one dropped.
//! - [`Vlq`]: byte-aligned 7-bit groups, with a chunked mode that moves as many
//!   whole integers as fit between two [`Buffer`]s and can resume where it stopped.
//! - [`RawCodec`]: fixed 64-bit values, the uncompressed baseline.
//!
//! All codecs share the [`IntegerCodec`] contract over a bit cursor
//! ([`bits::BitWriter`]/[`bits::BitReader`]); signed widths go through
//! [`kernels::zigzag`].
//!
//! # Example
//! ```
//! use tambak_intcodec::bits::{MemoryBitReader, MemoryBitWriter};
//! use tambak_intcodec::{IntegerCodec, ThompsonAlpha};
//!
//! let codec = ThompsonAlpha::default();
//! let mut writer = MemoryBitWriter::new();
//! codec.encode_i32(-42, &mut writer).unwrap();
//! let bytes = writer.into_bytes();
//!
//! let mut reader = MemoryBitReader::new(&bytes);
//! assert_eq!(codec.decode_i32(&mut reader).unwrap(), -42);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bits;
pub mod buffer;
pub mod config;
pub mod error;
pub mod kernels;
pub mod traits;
pub mod utils;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use buffer::Buffer;
pub use config::{CodecConfig, CodecKind};
pub use error::{CodecError, Result};
pub use kernels::{RawCodec, ThompsonAlpha, Vlq};
pub use observability::enable_verbose_logging;
pub use traits::IntegerCodec;
