// src/crypto/decrypt.rs
use tracing::debug;

use super::block::decrypt_blocks;
use super::kdf::derive_key;
use super::mac;
use super::padding::unpad;
use super::random::RandomSource;
use crate::cipher::AuthenticatedCipher;
use crate::envelope::Envelope;
use crate::error::{CipherError, Result};

impl<R: RandomSource> AuthenticatedCipher<R> {
    /// Decrypt an envelope, discarding its metadata
    pub fn decrypt(&self, key: &[u8], envelope: &[u8]) -> Result<Vec<u8>> {
        self.decrypt_with_metadata(key, envelope)
            .map(|(plaintext, _)| plaintext)
    }

    /// Decrypt an envelope → (plaintext, metadata).
    ///
    /// The MAC is verified before any decryption happens. On any error no
    /// plaintext is returned.
    pub fn decrypt_with_metadata(
        &self,
        key: &[u8],
        envelope: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let config = &self.config;
        let envelope = Envelope::decode(envelope, config.format_version, config.mac_len())
            .inspect_err(|err| debug!(%err, "rejected envelope"))?;

        // The count is unauthenticated: bound it before any PBKDF2 work
        if envelope.iterations == 0 {
            return Err(CipherError::InvalidEnvelope("zero KDF iterations"));
        }
        if envelope.iterations > config.max_iterations {
            debug!(
                iterations = envelope.iterations,
                max_iterations = config.max_iterations,
                "envelope iteration count over limit"
            );
            return Err(CipherError::InvalidEnvelope(
                "KDF iterations exceed configured maximum",
            ));
        }

        // Recorded iteration count, not the configured one
        let signing_key = derive_key(
            key,
            envelope.signing_salt,
            envelope.iterations,
            config.key_len(),
        )?;
        let authentic = mac::verify(
            config.mac_algorithm,
            signing_key.expose_secret(),
            envelope.ciphertext,
            envelope.mac,
        )?;
        if !authentic {
            debug!("envelope MAC mismatch");
            return Err(CipherError::AuthenticationFailed);
        }

        let encryption_key = derive_key(
            key,
            envelope.symmetric_salt,
            envelope.iterations,
            config.key_len(),
        )?;
        let padded = decrypt_blocks(
            encryption_key.expose_secret(),
            envelope.iv,
            envelope.ciphertext,
        )?;
        let plaintext = unpad(&padded)?;

        debug!(
            plaintext_len = plaintext.len(),
            metadata_len = envelope.metadata.len(),
            iterations = envelope.iterations,
            "decrypted envelope"
        );
        Ok((plaintext, envelope.metadata.to_vec()))
    }
}
