// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O
//!
//! Primitives (`kdf`, `padding`, `block`, `mac`, `random`) work on
//! in-memory buffers. `encrypt`, `decrypt` and `rotate` compose them into
//! the methods of [`AuthenticatedCipher`](crate::cipher::AuthenticatedCipher).
pub mod block;
pub mod kdf;
pub mod mac;
pub mod padding;
pub mod random;

mod decrypt;
mod encrypt;
mod rotate;

pub use block::{decrypt_blocks, encrypt_blocks};
pub use kdf::derive_key;
pub use padding::{pad, unpad};
pub use random::{RandomSource, SystemRandom};
