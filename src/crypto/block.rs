// src/crypto/block.rs
//! AES-CBC block engine
//!
//! Works on already-padded, block-aligned buffers. The key length picks
//! the AES variant; the format default is AES-256.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::consts::{BLOCK_SIZE, IV_LEN};
use crate::error::{CipherError, Result};

const KEY_LENGTHS: &str = "16, 24 or 32 bytes";

/// CBC-encrypt `padded` under `key` and `iv`
pub fn encrypt_blocks(key: &[u8], iv: &[u8], padded: &[u8]) -> Result<Vec<u8>> {
    check_iv(iv)?;
    check_aligned(padded)?;
    match key.len() {
        16 => encrypt_with::<cbc::Encryptor<Aes128>>(key, iv, padded),
        24 => encrypt_with::<cbc::Encryptor<Aes192>>(key, iv, padded),
        32 => encrypt_with::<cbc::Encryptor<Aes256>>(key, iv, padded),
        got => Err(CipherError::InvalidKeyLength {
            expected: KEY_LENGTHS,
            got,
        }),
    }
}

/// CBC-decrypt `ciphertext`; padding is left in place
pub fn decrypt_blocks(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_iv(iv)?;
    check_aligned(ciphertext)?;
    match key.len() {
        16 => decrypt_with::<cbc::Decryptor<Aes128>>(key, iv, ciphertext),
        24 => decrypt_with::<cbc::Decryptor<Aes192>>(key, iv, ciphertext),
        32 => decrypt_with::<cbc::Decryptor<Aes256>>(key, iv, ciphertext),
        got => Err(CipherError::InvalidKeyLength {
            expected: KEY_LENGTHS,
            got,
        }),
    }
}

fn encrypt_with<E>(key: &[u8], iv: &[u8], padded: &[u8]) -> Result<Vec<u8>>
where
    E: KeyIvInit + BlockEncryptMut,
{
    let encryptor = E::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyLength {
        expected: KEY_LENGTHS,
        got: key.len(),
    })?;
    Ok(encryptor.encrypt_padded_vec_mut::<NoPadding>(padded))
}

fn decrypt_with<D>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let decryptor = D::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyLength {
        expected: KEY_LENGTHS,
        got: key.len(),
    })?;
    decryptor
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| CipherError::UnalignedCiphertext(ciphertext.len()))
}

fn check_iv(iv: &[u8]) -> Result<()> {
    if iv.len() != IV_LEN {
        return Err(CipherError::InvalidIvLength(iv.len()));
    }
    Ok(())
}

fn check_aligned(data: &[u8]) -> Result<()> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::UnalignedCiphertext(data.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIST SP 800-38A F.2.5 (CBC-AES256.Encrypt), first two blocks
    const NIST_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
    const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
    const NIST_PT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";
    const NIST_CT: &str = "f58c4c04d6e5f1ba779eabfb5f7bfbd69cfc4e967edb808d679f777bc6702c7d";

    #[test]
    fn matches_nist_cbc_aes256_vector() {
        let key = hex::decode(NIST_KEY).unwrap();
        let iv = hex::decode(NIST_IV).unwrap();
        let pt = hex::decode(NIST_PT).unwrap();

        let ct = encrypt_blocks(&key, &iv, &pt).unwrap();
        assert_eq!(hex::encode(&ct), NIST_CT);
        assert_eq!(decrypt_blocks(&key, &iv, &ct).unwrap(), pt);
    }

    #[test]
    fn round_trips_every_aes_key_size() {
        let iv = [7u8; 16];
        let data = [0x42u8; 48];
        for len in [16, 24, 32] {
            let key = vec![0x11u8; len];
            let ct = encrypt_blocks(&key, &iv, &data).unwrap();
            assert_eq!(ct.len(), data.len());
            assert_ne!(ct.as_slice(), data.as_slice());
            assert_eq!(decrypt_blocks(&key, &iv, &ct).unwrap(), data);
        }
    }

    #[test]
    fn rejects_bad_key_length() {
        let err = encrypt_blocks(&[0u8; 31], &[0u8; 16], &[0u8; 16]).unwrap_err();
        assert!(matches!(err, CipherError::InvalidKeyLength { got: 31, .. }));
    }

    #[test]
    fn rejects_bad_iv_length() {
        let err = encrypt_blocks(&[0u8; 32], &[0u8; 12], &[0u8; 16]).unwrap_err();
        assert!(matches!(err, CipherError::InvalidIvLength(12)));
    }

    #[test]
    fn rejects_unaligned_input() {
        let err = decrypt_blocks(&[0u8; 32], &[0u8; 16], &[0u8; 20]).unwrap_err();
        assert!(matches!(err, CipherError::UnalignedCiphertext(20)));
        let err = encrypt_blocks(&[0u8; 32], &[0u8; 16], &[0u8; 5]).unwrap_err();
        assert!(matches!(err, CipherError::UnalignedCiphertext(5)));
    }
}
