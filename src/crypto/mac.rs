// src/crypto/mac.rs
//! HMAC over the ciphertext
//!
//! Only the ciphertext is authenticated. Header, salts, IV and metadata
//! sit outside the MAC in format version 2.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::enums::MacAlgorithm;
use crate::error::{CipherError, Result};

pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha384 = Hmac<Sha384>;
pub type HmacSha512 = Hmac<Sha512>;

/// Compute the MAC of `ciphertext` under `signing_key`
pub fn tag(algorithm: MacAlgorithm, signing_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        MacAlgorithm::Sha256 => compute::<HmacSha256>(signing_key, ciphertext),
        MacAlgorithm::Sha384 => compute::<HmacSha384>(signing_key, ciphertext),
        MacAlgorithm::Sha512 => compute::<HmacSha512>(signing_key, ciphertext),
    }
}

/// Constant-time check of `expected` against the recomputed MAC
pub fn verify(
    algorithm: MacAlgorithm,
    signing_key: &[u8],
    ciphertext: &[u8],
    expected: &[u8],
) -> Result<bool> {
    match algorithm {
        MacAlgorithm::Sha256 => check::<HmacSha256>(signing_key, ciphertext, expected),
        MacAlgorithm::Sha384 => check::<HmacSha384>(signing_key, ciphertext, expected),
        MacAlgorithm::Sha512 => check::<HmacSha512>(signing_key, ciphertext, expected),
    }
}

fn keyed<M: Mac + KeyInit>(signing_key: &[u8]) -> Result<M> {
    <M as KeyInit>::new_from_slice(signing_key).map_err(|_| CipherError::InvalidKeyLength {
        expected: "any HMAC key length",
        got: signing_key.len(),
    })
}

fn compute<M: Mac + KeyInit>(signing_key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = keyed::<M>(signing_key)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn check<M: Mac + KeyInit>(signing_key: &[u8], data: &[u8], expected: &[u8]) -> Result<bool> {
    let mut mac = keyed::<M>(signing_key)?;
    mac.update(data);
    Ok(mac.verify_slice(expected).is_ok())
}
