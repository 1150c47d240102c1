// src/crypto/random.rs
//! Source of salts and IVs
//!
//! Production code uses [`SystemRandom`]. The trait exists so tests can
//! replay fixed bytes and pin the exact wire output.

use std::sync::Arc;

use rand::RngCore;

use crate::aliases::Iv16;
use crate::consts::IV_LEN;
use crate::error::Result;

/// Cryptographically secure byte source, shareable across threads
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// `rand`'s thread-local CSPRNG, seeded from the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        rand::rng().fill_bytes(buf);
        Ok(())
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

pub fn random_bytes<R: RandomSource + ?Sized>(rng: &R, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    rng.fill(&mut out)?;
    Ok(out)
}

pub fn random_iv<R: RandomSource + ?Sized>(rng: &R) -> Result<Iv16> {
    let mut iv = [0u8; IV_LEN];
    rng.fill(&mut iv)?;
    Ok(Iv16::new(iv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_fills_requested_length() {
        let a = random_bytes(&SystemRandom, 32).unwrap();
        let b = random_bytes(&SystemRandom, 32).unwrap();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
        assert!(random_bytes(&SystemRandom, 0).unwrap().is_empty());
    }

    #[test]
    fn fresh_iv_each_call() {
        let a = random_iv(&SystemRandom).unwrap();
        let b = random_iv(&SystemRandom).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
