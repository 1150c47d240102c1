// src/lib.rs
//! cbc-envelope — versioned authenticated-encryption envelopes
//!
//! Features:
//! - PBKDF2-HMAC-SHA256 key derivation, separate encryption and signing keys
//! - AES-256-CBC with PKCS#7 padding
//! - HMAC-SHA-256/384/512 over the ciphertext, verified before decryption
//! - Byte-exact, bounds-checked wire format (version 2)
//! - secure-gate wrappers for all derived key material
//!
//! ```no_run
//! use cbc_envelope::AuthenticatedCipher;
//!
//! # fn main() -> cbc_envelope::Result<()> {
//! let cipher = AuthenticatedCipher::default();
//! let envelope = cipher.encrypt(b"correct horse battery staple", b"Hello, World!")?;
//! let plaintext = cipher.decrypt(b"correct horse battery staple", &envelope)?;
//! assert_eq!(plaintext, b"Hello, World!");
//! # Ok(())
//! # }
//! ```

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod envelope;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use cipher::AuthenticatedCipher;
pub use config::CipherConfig;
pub use crypto::{RandomSource, SystemRandom};
pub use envelope::{peek_version, Envelope, FixedHeader};
pub use enums::{KdfHash, MacAlgorithm};
pub use error::{CipherError, Result};
