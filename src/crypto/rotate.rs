// src/crypto/rotate.rs
use tracing::debug;

use super::random::RandomSource;
use crate::cipher::AuthenticatedCipher;
use crate::error::Result;

impl<R: RandomSource> AuthenticatedCipher<R> {
    /// Re-encrypt an envelope under `new_key`: old key → new key
    ///
    /// Metadata is carried over; salts and IV are fresh.
    pub fn rekey(&self, old_key: &[u8], new_key: &[u8], envelope: &[u8]) -> Result<Vec<u8>> {
        let (plaintext, metadata) = self.decrypt_with_metadata(old_key, envelope)?;
        let rotated = self.encrypt_with_metadata(new_key, &plaintext, &metadata)?;
        debug!(envelope_len = rotated.len(), "rekeyed envelope");
        Ok(rotated)
    }
}
