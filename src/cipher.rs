// src/cipher.rs
//! The authenticated cipher: configuration holder for encrypt/decrypt
//!
//! Operations live in `crypto::{encrypt, decrypt, rotate}`.

use std::fmt;

use crate::config::CipherConfig;
use crate::crypto::random::{RandomSource, SystemRandom};
use crate::enums::MacAlgorithm;
use crate::error::Result;

/// PBKDF2 + AES-CBC + HMAC envelope cipher
///
/// Holds no secrets and no per-call state, so one instance can serve
/// concurrent callers.
#[derive(Clone)]
pub struct AuthenticatedCipher<R: RandomSource = SystemRandom> {
    pub(crate) config: CipherConfig,
    pub(crate) rng: R,
}

impl AuthenticatedCipher<SystemRandom> {
    pub fn new(config: CipherConfig) -> Result<Self> {
        Self::with_random(config, SystemRandom)
    }
}

impl Default for AuthenticatedCipher<SystemRandom> {
    fn default() -> Self {
        Self {
            config: CipherConfig::default(),
            rng: SystemRandom,
        }
    }
}

impl<R: RandomSource> AuthenticatedCipher<R> {
    /// Build with a custom random source for salts and IVs
    pub fn with_random(config: CipherConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Length of the MAC field this cipher writes and expects
    pub fn mac_len(&self) -> usize {
        self.config.mac_len()
    }

    /// Select the MAC hash by name: `SHA256`, `SHA384` or `SHA512`
    pub fn set_mac_algorithm(&mut self, name: &str) -> Result<()> {
        self.config.mac_algorithm = name.parse::<MacAlgorithm>()?;
        Ok(())
    }

    pub fn with_mac_algorithm(mut self, algorithm: MacAlgorithm) -> Self {
        self.config.mac_algorithm = algorithm;
        self
    }
}

impl<R: RandomSource> fmt::Debug for AuthenticatedCipher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedCipher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
