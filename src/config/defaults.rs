// src/config/defaults.rs
use crate::consts::{
    CURRENT_FORMAT_VERSION, DEFAULT_KDF_ITERATIONS, DEFAULT_KEY_SIZE_BITS, DEFAULT_MAX_KDF_ITERATIONS,
    DEFAULT_SALT_SIZE_BITS,
};
use crate::enums::MacAlgorithm;

pub fn default_iterations() -> u32 {
    DEFAULT_KDF_ITERATIONS
}

pub fn default_max_iterations() -> u32 {
    DEFAULT_MAX_KDF_ITERATIONS
}

pub fn default_key_size_bits() -> u32 {
    DEFAULT_KEY_SIZE_BITS
}

pub fn default_format_version() -> u16 {
    CURRENT_FORMAT_VERSION
}

pub fn default_salt_size_bits() -> u32 {
    DEFAULT_SALT_SIZE_BITS
}

pub fn default_mac_algorithm() -> MacAlgorithm {
    MacAlgorithm::Sha384
}
