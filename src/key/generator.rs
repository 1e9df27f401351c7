// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::cipher::mode::CBC_IV_SIZE;
use crate::config::CryptoConfig;
use crate::error::Result;
use crate::key::{AsymmetricKeyPair, SymmetricKey};
use crate::random::SecureRandom;
use crate::types::AesKeySize;

/// AES key of `size_bits` (128, 192 or 256)
pub fn generate_symmetric_key(size_bits: u32) -> Result<SymmetricKey> {
    SymmetricKey::generate(AesKeySize::from_bits(size_bits)?)
}

/// RSA key pair of `size_bits` (2048, 3072 or 4096)
pub fn generate_key_pair(size_bits: usize) -> Result<AsymmetricKeyPair> {
    AsymmetricKeyPair::generate(size_bits)
}

/// Produces keys, IVs and salts sized by a [`CryptoConfig`].
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    config: CryptoConfig,
    rng: SecureRandom,
}

impl KeyGenerator {
    pub fn new(config: CryptoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SecureRandom::new()?,
        })
    }

    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    pub fn symmetric_key(&self) -> Result<SymmetricKey> {
        let mut bytes = self.rng.bytes(self.config.aes_key_size.bytes())?;
        let key = SymmetricKey::from_bytes(&bytes);
        zeroize::Zeroize::zeroize(&mut bytes);
        key
    }

    pub fn key_pair(&self) -> Result<AsymmetricKeyPair> {
        AsymmetricKeyPair::generate(self.config.rsa_key_bits)
    }

    /// GCM nonce of the configured `iv_size`
    pub fn iv(&self) -> Result<Vec<u8>> {
        self.rng.bytes(self.config.iv_size)
    }

    /// CBC IV, always 16 bytes whatever `iv_size` says
    pub fn cbc_iv(&self) -> Result<Vec<u8>> {
        self.rng.bytes(CBC_IV_SIZE)
    }

    pub fn salt(&self) -> Result<Vec<u8>> {
        self.rng.bytes(self.config.salt_size)
    }
}
