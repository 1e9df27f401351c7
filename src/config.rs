// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Toolkit defaults
//!
//! Sizes and cost parameters used when the caller asks for "a key", "an IV" or
//! "a password hash" without spelling every parameter out.

use crate::cipher::mode::{CipherMode, GcmTagLength, GCM_NONCE_MAX, GCM_NONCE_MIN};
use crate::error::{CryptoError, Result};
use crate::key::derivation::Pbkdf2Prf;
use crate::key::rsa_keys::SUPPORTED_RSA_KEY_SIZES;
use crate::types::AesKeySize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// AES key size for generated symmetric keys
    pub aes_key_size: AesKeySize,

    /// GCM nonce length in bytes (12 to 16). CBC IVs are always 16 bytes,
    /// see `KeyGenerator::cbc_iv`.
    pub iv_size: usize,

    /// GCM tag length
    pub gcm_tag_length: GcmTagLength,

    /// RSA modulus size in bits for generated key pairs
    pub rsa_key_bits: usize,

    /// Salt length in bytes for salted hashes and PBKDF2
    pub salt_size: usize,

    /// PBKDF2 pseudorandom function
    pub pbkdf2_prf: Pbkdf2Prf,

    pub pbkdf2_iterations: u32,

    /// PBKDF2 output length in bits
    pub pbkdf2_key_bits: usize,

    /// Characters per line when printing hex
    pub hex_chunk_size: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            aes_key_size: AesKeySize::Aes128,
            iv_size: 16,
            gcm_tag_length: GcmTagLength::Bits128,
            rsa_key_bits: 2048,
            salt_size: 16,
            pbkdf2_prf: Pbkdf2Prf::HmacSha1,
            pbkdf2_iterations: 65_536,
            pbkdf2_key_bits: 128,
            hex_chunk_size: 16,
        }
    }
}

impl CryptoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CryptoError::InvalidConfig(format!("Malformed config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CryptoError::InternalError(format!("Config serialization: {}", e)))
    }

    pub fn with_aes_key_size(mut self, size: AesKeySize) -> Self {
        self.aes_key_size = size;
        self
    }

    pub fn with_iv_size(mut self, size: usize) -> Self {
        self.iv_size = size;
        self
    }

    pub fn with_gcm_tag_length(mut self, tag: GcmTagLength) -> Self {
        self.gcm_tag_length = tag;
        self
    }

    pub fn with_rsa_key_bits(mut self, bits: usize) -> Self {
        self.rsa_key_bits = bits;
        self
    }

    pub fn with_pbkdf2(mut self, prf: Pbkdf2Prf, iterations: u32, key_bits: usize) -> Self {
        self.pbkdf2_prf = prf;
        self.pbkdf2_iterations = iterations;
        self.pbkdf2_key_bits = key_bits;
        self
    }

    /// GCM mode carrying the configured tag length
    pub fn gcm_mode(&self) -> CipherMode {
        CipherMode::Gcm(self.gcm_tag_length)
    }

    pub fn validate(&self) -> Result<()> {
        if !(GCM_NONCE_MIN..=GCM_NONCE_MAX).contains(&self.iv_size) {
            return Err(CryptoError::InvalidConfig(format!(
                "iv_size must be between {} and {} bytes, got {}",
                GCM_NONCE_MIN, GCM_NONCE_MAX, self.iv_size
            )));
        }
        if !SUPPORTED_RSA_KEY_SIZES.contains(&self.rsa_key_bits) {
            return Err(CryptoError::InvalidConfig(format!(
                "rsa_key_bits must be one of {:?}, got {}",
                SUPPORTED_RSA_KEY_SIZES, self.rsa_key_bits
            )));
        }
        if self.salt_size == 0 {
            return Err(CryptoError::InvalidConfig("salt_size must be non-zero".into()));
        }
        if self.pbkdf2_iterations == 0 {
            return Err(CryptoError::InvalidConfig(
                "pbkdf2_iterations must be non-zero".into(),
            ));
        }
        if self.pbkdf2_key_bits == 0 || self.pbkdf2_key_bits % 8 != 0 {
            return Err(CryptoError::InvalidConfig(format!(
                "pbkdf2_key_bits must be a positive multiple of 8, got {}",
                self.pbkdf2_key_bits
            )));
        }
        if self.hex_chunk_size == 0 {
            return Err(CryptoError::InvalidConfig(
                "hex_chunk_size must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
