// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Cipher block chaining without padding.
//!
//! `C[i] = E(P[i] ^ C[i-1])` with `C[-1] = IV`.

use crate::cipher::aes::AesBlockCipher;
use crate::cipher::mode::{CipherMode, BLOCK_SIZE};
use crate::error::Result;

fn xor_in_place(block: &mut [u8], mask: &[u8; BLOCK_SIZE]) {
    for (b, m) in block.iter_mut().zip(mask.iter()) {
        *b ^= m;
    }
}

fn iv_block(iv: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    let checked = CipherMode::Cbc.check_iv(Some(iv))?.unwrap_or(iv);
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(checked);
    Ok(block)
}

pub fn encrypt(cipher: &AesBlockCipher, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    CipherMode::Cbc.check_alignment(plaintext.len())?;
    let mut previous = iv_block(iv)?;

    let mut out = plaintext.to_vec();
    for block in out.chunks_exact_mut(BLOCK_SIZE) {
        xor_in_place(block, &previous);
        cipher.encrypt_block(block);
        previous.copy_from_slice(block);
    }
    Ok(out)
}

pub fn decrypt(cipher: &AesBlockCipher, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    CipherMode::Cbc.check_alignment(ciphertext.len())?;
    let mut previous = iv_block(iv)?;

    let mut out = ciphertext.to_vec();
    let mut current = [0u8; BLOCK_SIZE];
    for block in out.chunks_exact_mut(BLOCK_SIZE) {
        current.copy_from_slice(block);
        cipher.decrypt_block(block);
        xor_in_place(block, &previous);
        previous = current;
    }
    Ok(out)
}
