// src/config/app.rs
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, SUPPORTED_KEY_SIZE_BITS};
use crate::enums::{KdfHash, MacAlgorithm};
use crate::error::{CipherError, Result};

/// Parameters of the envelope format
///
/// Missing TOML keys fall back to the defaults (10 000 iterations,
/// 256-bit keys, format version 2, 64-bit salts, HMAC-SHA-384).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct CipherConfig {
    pub iterations: u32,
    /// Largest iteration count accepted from an envelope header
    pub max_iterations: u32,
    pub key_size_bits: u32,
    pub format_version: u16,
    pub salt_size_bits: u32,
    /// Hash inside the HMAC only. PBKDF2 stays on SHA-256, see [`CipherConfig::kdf_hash`].
    pub mac_algorithm: MacAlgorithm,
}

/// On-disk shape. The hash name stays text until `FromStr` sees it, so a
/// bad name is an `InvalidConfiguration` like everywhere else.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default = "default_iterations")]
    iterations: u32,
    max_iterations: Option<u32>,
    #[serde(default = "default_key_size_bits")]
    key_size_bits: u32,
    #[serde(default = "default_format_version")]
    format_version: u16,
    #[serde(default = "default_salt_size_bits")]
    salt_size_bits: u32,
    mac_algorithm: Option<String>,
}

impl TryFrom<ConfigFile> for CipherConfig {
    type Error = CipherError;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let mac_algorithm = match file.mac_algorithm {
            Some(name) => name.parse()?,
            None => default_mac_algorithm(),
        };
        let config = Self {
            iterations: file.iterations,
            // an unset ceiling never undercuts the file's own iteration count
            max_iterations: file
                .max_iterations
                .unwrap_or_else(|| default_max_iterations().max(file.iterations)),
            key_size_bits: file.key_size_bits,
            format_version: file.format_version,
            salt_size_bits: file.salt_size_bits,
            mac_algorithm,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            max_iterations: default_max_iterations(),
            key_size_bits: default_key_size_bits(),
            format_version: default_format_version(),
            salt_size_bits: default_salt_size_bits(),
            mac_algorithm: default_mac_algorithm(),
        }
    }
}

impl CipherConfig {
    /// Also lifts `max_iterations` if the new count is above it
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self.max_iterations = self.max_iterations.max(iterations);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_key_size_bits(mut self, bits: u32) -> Self {
        self.key_size_bits = bits;
        self
    }

    pub fn with_salt_size_bits(mut self, bits: u32) -> Self {
        self.salt_size_bits = bits;
        self
    }

    pub fn with_mac_algorithm(mut self, algorithm: MacAlgorithm) -> Self {
        self.mac_algorithm = algorithm;
        self
    }

    /// Check every field against what the format and AES can carry
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(CipherError::InvalidConfiguration(
                "iterations must be positive".into(),
            ));
        }
        if self.max_iterations < self.iterations {
            return Err(CipherError::InvalidConfiguration(format!(
                "max_iterations {} is below iterations {}",
                self.max_iterations, self.iterations
            )));
        }
        if !SUPPORTED_KEY_SIZE_BITS.contains(&self.key_size_bits) {
            return Err(CipherError::InvalidConfiguration(format!(
                "key size {} bits is not a valid AES key size",
                self.key_size_bits
            )));
        }
        if self.salt_size_bits == 0 || self.salt_size_bits % 8 != 0 {
            return Err(CipherError::InvalidConfiguration(format!(
                "salt size {} bits must be a positive multiple of 8",
                self.salt_size_bits
            )));
        }
        if self.salt_len() > u16::MAX as usize {
            return Err(CipherError::InvalidConfiguration(format!(
                "salt size {} bits does not fit the 16-bit length field",
                self.salt_size_bits
            )));
        }
        Ok(())
    }

    /// Derived key length in bytes
    pub fn key_len(&self) -> usize {
        (self.key_size_bits / 8) as usize
    }

    /// Length of each salt in bytes
    pub fn salt_len(&self) -> usize {
        (self.salt_size_bits / 8) as usize
    }

    pub fn mac_len(&self) -> usize {
        self.mac_algorithm.tag_len()
    }

    /// PBKDF2's PRF. Not configurable.
    pub fn kdf_hash(&self) -> KdfHash {
        KdfHash::Sha256
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Self::try_from(file)
    }

    /// Read a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading cipher config");
        Self::from_toml_str(&content)
    }

    /// Load from the file named by `CBC_ENVELOPE_CONFIG`, or defaults if unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                debug!(var = CONFIG_ENV_VAR, "config path not set, using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}
