// tests/support.rs
//! Replayable randomness and fast cipher configs

use std::collections::VecDeque;
use std::sync::Mutex;

use cbc_envelope::{AuthenticatedCipher, CipherConfig, CipherError, RandomSource};

/// Hands out pre-recorded byte chunks in order: symmetric salt, signing salt, IV
#[allow(dead_code)]
pub struct ReplayRandom {
    chunks: Mutex<VecDeque<Vec<u8>>>,
}

#[allow(dead_code)]
impl ReplayRandom {
    pub fn new<I: IntoIterator<Item = Vec<u8>>>(chunks: I) -> Self {
        Self {
            chunks: Mutex::new(chunks.into_iter().collect()),
        }
    }
}

impl RandomSource for ReplayRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), CipherError> {
        let chunk = self
            .chunks
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CipherError::Random("replay exhausted".into()))?;
        if chunk.len() != buf.len() {
            return Err(CipherError::Random(format!(
                "replay chunk is {} bytes, caller wants {}",
                chunk.len(),
                buf.len()
            )));
        }
        buf.copy_from_slice(&chunk);
        Ok(())
    }
}

/// Low iteration count so tamper/truncation loops stay quick
#[allow(dead_code)]
pub fn fast_config() -> CipherConfig {
    CipherConfig::default().with_iterations(64)
}

#[allow(dead_code)]
pub fn fast_cipher() -> AuthenticatedCipher {
    AuthenticatedCipher::new(fast_config()).unwrap()
}
