// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Raw AES block transform, dispatched on key length.

use crate::cipher::mode::BLOCK_SIZE;
use crate::error::{CryptoError, Result};
use crate::key::SymmetricKey;
use crate::types::AesKeySize;
use aes_gcm::aes::cipher::generic_array::GenericArray;
use aes_gcm::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes_gcm::aes::{Aes128, Aes192, Aes256};

/// AES block cipher for one key
pub enum AesBlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesBlockCipher {
    pub fn new(key: &SymmetricKey) -> Result<Self> {
        let bytes = key.as_bytes();
        let invalid = |_| CryptoError::InvalidKeyLength(bytes.len());

        Ok(match key.size() {
            AesKeySize::Aes128 => Self::Aes128(Aes128::new_from_slice(bytes).map_err(invalid)?),
            AesKeySize::Aes192 => Self::Aes192(Aes192::new_from_slice(bytes).map_err(invalid)?),
            AesKeySize::Aes256 => Self::Aes256(Aes256::new_from_slice(bytes).map_err(invalid)?),
        })
    }

    /// Encrypts one 16-byte block in place.
    pub fn encrypt_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    /// Decrypts one 16-byte block in place.
    pub fn decrypt_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}
