// In: src/config.rs

//! Serializable codec selection.
//!
//! `CodecConfig` is meant to be created once at the application boundary (e.g.
//! from a JSON settings file) and turned into a ready codec with `build()`. The
//! persisted stream carries no header, so the same configuration must be used to
//! read data back.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kernels::thompson_alpha::DEFAULT_LENGTH_BITS;
use crate::kernels::{RawCodec, ThompsonAlpha, Vlq};
use crate::traits::IntegerCodec;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Which algorithm to encode with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    /// Length-prefixed code; see `length_bits`.
    ThompsonAlpha,

    /// **Default:** byte-aligned continuation groups. The only codec with a
    /// chunked buffer mode.
    #[default]
    Vlq,

    /// Fixed 64-bit little-endian values.
    Raw,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    #[serde(default)]
    pub kind: CodecKind,

    /// Width of the Thompson-Alpha length prefix, 1 to 6. Ignored by other codecs.
    #[serde(default = "default_length_bits")]
    pub length_bits: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            kind: CodecKind::default(),
            length_bits: default_length_bits(),
        }
    }
}

/// Helper for `serde` to provide a default for `length_bits`.
fn default_length_bits() -> u32 {
    DEFAULT_LENGTH_BITS
}

//==================================================================================
// II. Construction
//==================================================================================

impl CodecConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the configuration and constructs the codec it describes.
    pub fn build(&self) -> Result<Box<dyn IntegerCodec + Send + Sync>> {
        log::debug!("building codec from {:?}", self);
        let codec: Box<dyn IntegerCodec + Send + Sync> = match self.kind {
            CodecKind::ThompsonAlpha => Box::new(ThompsonAlpha::new(self.length_bits)?),
            CodecKind::Vlq => Box::new(Vlq::new()),
            CodecKind::Raw => Box::new(RawCodec::new()),
        };
        Ok(codec)
    }
}
