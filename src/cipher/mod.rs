// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Symmetric cipher engine
//!
//! Applies AES in an explicitly chosen [`CipherMode`]. No mode pads its
//! input: misaligned ECB/CBC input is rejected with
//! [`CryptoError::BlockSize`] instead of being padded or truncated, and a GCM
//! tag mismatch is reported as [`CryptoError::Authentication`].

pub mod aes;
pub mod cbc;
pub mod ecb;
pub mod gcm;
pub mod mode;


use crate::error::{CryptoError, Result};
use crate::key::SymmetricKey;
use aes::AesBlockCipher;
use log::debug;

pub use mode::{CipherMode, GcmTagLength, BLOCK_SIZE};

/// AES under one mode. Holds no key or per-call state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    mode: CipherMode,
}

impl Cipher {
    pub fn new(mode: CipherMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Encrypts `plaintext`.
    ///
    /// # Errors
    /// `BlockSize` for misaligned ECB/CBC input, `InvalidParameter` when the
    /// IV/nonce is missing or has the wrong length for the mode.
    pub fn encrypt(
        &self,
        key: &SymmetricKey,
        iv: Option<&[u8]>,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        self.encrypt_with_aad(key, iv, plaintext, None)
    }

    /// Decrypts `ciphertext`.
    ///
    /// # Errors
    /// As [`Cipher::encrypt`], plus `Authentication` when a GCM tag does not
    /// verify.
    pub fn decrypt(
        &self,
        key: &SymmetricKey,
        iv: Option<&[u8]>,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        self.decrypt_with_aad(key, iv, ciphertext, None)
    }

    /// Like [`Cipher::encrypt`], authenticating `aad` as well (GCM only).
    pub fn encrypt_with_aad(
        &self,
        key: &SymmetricKey,
        iv: Option<&[u8]>,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        self.check_aad(aad)?;
        let iv = self.mode.check_iv(iv)?;
        debug!(
            "{} {} encrypt: {} bytes",
            key.size(),
            self.mode,
            plaintext.len()
        );

        match (self.mode, iv) {
            (CipherMode::Ecb, _) => ecb::encrypt(&AesBlockCipher::new(key)?, plaintext),
            (CipherMode::Cbc, Some(iv)) => cbc::encrypt(&AesBlockCipher::new(key)?, iv, plaintext),
            (CipherMode::Gcm(tag), Some(nonce)) => {
                gcm::encrypt(key, tag, nonce, aad.unwrap_or(&[]), plaintext)
            }
            (_, None) => Err(CryptoError::InvalidParameter(format!(
                "{} requires an IV",
                self.mode
            ))),
        }
    }

    /// Like [`Cipher::decrypt`], authenticating `aad` as well (GCM only).
    pub fn decrypt_with_aad(
        &self,
        key: &SymmetricKey,
        iv: Option<&[u8]>,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        self.check_aad(aad)?;
        let iv = self.mode.check_iv(iv)?;
        debug!(
            "{} {} decrypt: {} bytes",
            key.size(),
            self.mode,
            ciphertext.len()
        );

        match (self.mode, iv) {
            (CipherMode::Ecb, _) => ecb::decrypt(&AesBlockCipher::new(key)?, ciphertext),
            (CipherMode::Cbc, Some(iv)) => cbc::decrypt(&AesBlockCipher::new(key)?, iv, ciphertext),
            (CipherMode::Gcm(tag), Some(nonce)) => {
                gcm::decrypt(key, tag, nonce, aad.unwrap_or(&[]), ciphertext)
            }
            (_, None) => Err(CryptoError::InvalidParameter(format!(
                "{} requires an IV",
                self.mode
            ))),
        }
    }

    fn check_aad(&self, aad: Option<&[u8]>) -> Result<()> {
        if aad.is_some() && !self.mode.is_authenticated() {
            return Err(CryptoError::InvalidParameter(format!(
                "Associated data is not supported by {}",
                self.mode
            )));
        }
        Ok(())
    }
}

/// One-shot encryption under `mode`
pub fn encrypt(
    mode: CipherMode,
    key: &SymmetricKey,
    iv: Option<&[u8]>,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    Cipher::new(mode).encrypt(key, iv, plaintext)
}

/// One-shot decryption under `mode`
pub fn decrypt(
    mode: CipherMode,
    key: &SymmetricKey,
    iv: Option<&[u8]>,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    Cipher::new(mode).decrypt(key, iv, ciphertext)
}
