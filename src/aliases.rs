// src/aliases.rs
//! secure-gate wrappers for secret material
//!
//! These are the canonical types for key material inside the codec.
//! Everything here zeroizes on drop.

use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(Iv16, 16); // CBC initialization vector

// Dynamic secrets
dynamic_alias!(DerivedKey, Vec<u8>); // PBKDF2 output; length follows key_size_bits
