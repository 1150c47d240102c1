// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets of user-visible choices:
//! the MAC hash and the (fixed) key-derivation hash.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Hash function inside the envelope's HMAC
///
/// Only the MAC is affected. Key derivation always uses [`KdfHash::Sha256`].
///
/// Deserializes through [`FromStr`], so every spelling it accepts works in
/// config files too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum MacAlgorithm {
    #[serde(rename = "SHA256")]
    Sha256,
    #[default]
    #[serde(rename = "SHA384")]
    Sha384,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl MacAlgorithm {
    pub const ALL: [MacAlgorithm; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// Length of the MAC field in the envelope
    pub const fn tag_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MacAlgorithm {
    type Err = CipherError;

    /// Accepts `SHA256`, `sha-384`, `Sha512`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "").to_ascii_uppercase();
        match normalized.as_str() {
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(CipherError::InvalidConfiguration(format!(
                "invalid MAC hash algorithm {s:?} (expected SHA256, SHA384 or SHA512)"
            ))),
        }
    }
}

impl TryFrom<String> for MacAlgorithm {
    type Error = CipherError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// PRF used by PBKDF2
///
/// Deliberately separate from [`MacAlgorithm`]: changing the MAC hash
/// never changes how keys are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum KdfHash {
    #[default]
    Sha256,
}

impl KdfHash {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => crate::consts::KDF_HASH,
        }
    }
}
