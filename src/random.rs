// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Secure random source backing key, nonce and salt generation.

use crate::error::{CryptoError, Result};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::{Arc, Mutex, MutexGuard};
use zeroize::Zeroize;

pub trait EntropySource: Send + Sync {
    fn get_bytes(&self, buf: &mut [u8]) -> Result<()>;
}

struct OsEntropy;

impl EntropySource for OsEntropy {
    fn get_bytes(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf).map_err(|_| CryptoError::InsufficientEntropy)
    }
}

/// ChaCha20 CSPRNG seeded from the operating system.
///
/// Clones share the same generator, so a single instance can be handed to
/// several threads without producing correlated output.
#[derive(Clone)]
pub struct SecureRandom {
    csprng: Arc<Mutex<ChaCha20Rng>>,
}

impl SecureRandom {
    pub fn new() -> Result<Self> {
        let mut seed = [0u8; 32];
        OsEntropy.get_bytes(&mut seed)?;
        let rng = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        Ok(Self {
            csprng: Arc::new(Mutex::new(rng)),
        })
    }

    pub fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.rng().fill_bytes(dest);
        Ok(())
    }

    pub fn bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.fill(&mut out)?;
        Ok(out)
    }

    // Recover from a poisoned lock.
    fn rng(&self) -> MutexGuard<'_, ChaCha20Rng> {
        self.csprng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecureRandom")
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng().try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRandom {}

/// `n` bytes from a freshly seeded generator
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    SecureRandom::new()?.bytes(n)
}

/// Random IV/nonce of `len` bytes
pub fn random_nonce(len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Err(CryptoError::InvalidArgument(
            "Nonce length must be greater than zero".into(),
        ));
    }
    random_bytes(len)
}
