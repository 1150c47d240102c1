// src/crypto/padding.rs
//! PKCS#7 padding over 16-byte AES blocks

use subtle::{ConstantTimeEq, ConstantTimeGreater};

use crate::consts::BLOCK_SIZE;
use crate::error::{CipherError, Result};

/// Pad to a multiple of the block size.
///
/// Always adds 1..=16 bytes, so block-aligned input gains a whole block.
pub fn pad(plaintext: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(plaintext.len() + pad_len);
    out.extend_from_slice(plaintext);
    out.resize(plaintext.len() + pad_len, pad_len as u8);
    out
}

/// Strip and validate PKCS#7 padding.
///
/// The final block is checked without data-dependent branches; any
/// problem collapses into a single `MalformedPadding`.
pub fn unpad(padded: &[u8]) -> Result<Vec<u8>> {
    if padded.is_empty() || padded.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::MalformedPadding);
    }

    let last_block = &padded[padded.len() - BLOCK_SIZE..];
    let pad_len = last_block[BLOCK_SIZE - 1];

    let mut valid = !pad_len.ct_eq(&0) & !pad_len.ct_gt(&(BLOCK_SIZE as u8));
    for (i, byte) in last_block.iter().rev().enumerate() {
        let in_padding = !((i as u8 + 1).ct_gt(&pad_len));
        valid &= !in_padding | byte.ct_eq(&pad_len);
    }

    if !bool::from(valid) {
        return Err(CipherError::MalformedPadding);
    }
    Ok(padded[..padded.len() - pad_len as usize].to_vec())
}
