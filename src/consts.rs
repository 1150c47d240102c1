// src/consts.rs
//! Shared constants — wire layout and security parameters

/// AES block size; also the IV length
pub const BLOCK_SIZE: usize = 16;

/// IV length written into every envelope
pub const IV_LEN: usize = BLOCK_SIZE;

/// version(2) + metadata len(4) + iterations(4) + two salt lengths(2 + 2)
pub const FIXED_HEADER_LEN: usize = 14;

/// Envelope layout stamped by `encrypt`
pub const CURRENT_FORMAT_VERSION: u16 = 2;

/// PBKDF2 rounds per derived key
// 10_000 matches the format's historical default; raise via config for passphrases
pub const DEFAULT_KDF_ITERATIONS: u32 = 10_000;

/// Ceiling on the iteration count a decrypting side will honor
// the count travels unauthenticated; 100x the default
pub const DEFAULT_MAX_KDF_ITERATIONS: u32 = 1_000_000;

/// Derived key length (AES-256, and the HMAC key)
pub const DEFAULT_KEY_SIZE_BITS: u32 = 256;

/// Each of the two salts
pub const DEFAULT_SALT_SIZE_BITS: u32 = 64;

/// Valid AES key sizes
pub const SUPPORTED_KEY_SIZE_BITS: [u32; 3] = [128, 192, 256];

/// The PRF inside PBKDF2. Does not follow the MAC algorithm.
pub const KDF_HASH: &str = "SHA256";

/// Env var pointing at a TOML cipher config
pub const CONFIG_ENV_VAR: &str = "CBC_ENVELOPE_CONFIG";
