// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unsupported envelope version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    #[error("envelope truncated: need at least {needed} bytes, got {actual}")]
    TruncatedEnvelope { needed: usize, actual: usize },

    /// Tampered envelope or wrong key. The two are never told apart.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("malformed padding")]
    MalformedPadding,

    #[error("invalid envelope: {0}")]
    InvalidEnvelope(&'static str),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: &'static str, got: usize },

    #[error("invalid IV length: expected 16 bytes, got {0}")]
    InvalidIvLength(usize),

    #[error("ciphertext length {0} is not a multiple of the block size")]
    UnalignedCiphertext(usize),

    #[error("random source failed: {0}")]
    Random(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
