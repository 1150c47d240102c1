// src/config/mod.rs
//! Cipher configuration
//!
//! A plain value: built in code, or parsed from TOML with env-var lookup
//! for the file path. Nothing is cached process-wide.

pub use app::CipherConfig;

mod app;
mod defaults;
