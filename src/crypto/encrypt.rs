// src/crypto/encrypt.rs
use tracing::debug;

use super::block::encrypt_blocks;
use super::kdf::derive_key;
use super::mac;
use super::padding::pad;
use super::random::{random_bytes, random_iv, RandomSource};
use crate::cipher::AuthenticatedCipher;
use crate::envelope::Envelope;
use crate::error::Result;

impl<R: RandomSource> AuthenticatedCipher<R> {
    /// Encrypt `plaintext` under `key` into a self-describing envelope
    pub fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_metadata(key, plaintext, &[])
    }

    /// Encrypt and carry `metadata` alongside.
    ///
    /// Metadata is stored in the clear and is not covered by the MAC.
    pub fn encrypt_with_metadata(
        &self,
        key: &[u8],
        plaintext: &[u8],
        metadata: &[u8],
    ) -> Result<Vec<u8>> {
        let config = &self.config;

        // Draw order is part of the replayable contract: symmetric salt, signing salt, IV
        let symmetric_salt = random_bytes(&self.rng, config.salt_len())?;
        let signing_salt = random_bytes(&self.rng, config.salt_len())?;
        let iv = random_iv(&self.rng)?;

        let encryption_key = derive_key(key, &symmetric_salt, config.iterations, config.key_len())?;
        let signing_key = derive_key(key, &signing_salt, config.iterations, config.key_len())?;

        let ciphertext = encrypt_blocks(
            encryption_key.expose_secret(),
            iv.expose_secret(),
            &pad(plaintext),
        )?;
        let mac = mac::tag(config.mac_algorithm, signing_key.expose_secret(), &ciphertext)?;

        let envelope = Envelope {
            version: config.format_version,
            iterations: config.iterations,
            symmetric_salt: &symmetric_salt,
            signing_salt: &signing_salt,
            iv: iv.expose_secret(),
            metadata,
            mac: &mac,
            ciphertext: &ciphertext,
        }
        .encode()?;

        debug!(
            plaintext_len = plaintext.len(),
            metadata_len = metadata.len(),
            envelope_len = envelope.len(),
            mac = %config.mac_algorithm,
            "encrypted envelope"
        );
        Ok(envelope)
    }
}
