// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Electronic codebook. Each block is transformed on its own, so equal
//! plaintext blocks map to equal ciphertext blocks under one key.

use crate::cipher::aes::AesBlockCipher;
use crate::cipher::mode::{CipherMode, BLOCK_SIZE};
use crate::error::Result;

pub fn encrypt(cipher: &AesBlockCipher, plaintext: &[u8]) -> Result<Vec<u8>> {
    CipherMode::Ecb.check_alignment(plaintext.len())?;

    let mut out = plaintext.to_vec();
    for block in out.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(block);
    }
    Ok(out)
}

pub fn decrypt(cipher: &AesBlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>> {
    CipherMode::Ecb.check_alignment(ciphertext.len())?;

    let mut out = ciphertext.to_vec();
    for block in out.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(block);
    }
    Ok(out)
}
