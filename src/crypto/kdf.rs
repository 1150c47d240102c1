// src/crypto/kdf.rs
//! PBKDF2-HMAC-SHA256 key derivation
//!
//! The PRF is always SHA-256, whatever MAC hash the cipher is configured
//! with. Each operation derives two keys from the same secret with two
//! independent salts: one for AES, one for the HMAC.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::aliases::DerivedKey;
use crate::error::{CipherError, Result};

/// Stretch `secret` + `salt` into `output_len` bytes of key material
pub fn derive_key(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<DerivedKey> {
    if iterations == 0 {
        return Err(CipherError::InvalidConfiguration(
            "KDF iterations must be positive".into(),
        ));
    }
    if output_len == 0 {
        return Err(CipherError::InvalidConfiguration(
            "KDF output length must be positive".into(),
        ));
    }

    let mut out = vec![0u8; output_len];
    pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut out);
    Ok(DerivedKey::new(out))
}
