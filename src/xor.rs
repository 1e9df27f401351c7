// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Repeating-key XOR.
//!
//! A teaching cipher with no security value. Applying [`xor`] twice with the
//! same key returns the original data.

use crate::error::{CryptoError, Result};
use crate::random::SecureRandom;
use rand::Rng;

/// XORs `data` with `key`, cycling the key as needed.
///
/// # Errors
/// `InvalidArgument` when `key` is empty.
pub fn xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CryptoError::InvalidArgument("XOR key must not be empty".into()));
    }

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect())
}

pub fn xor_byte(a: u8, b: u8) -> u8 {
    a ^ b
}

/// `bits / 8` random key bytes; remainder bits are dropped.
pub fn generate_key(bits: usize) -> Result<Vec<u8>> {
    SecureRandom::new()?.bytes(bits / 8)
}

/// Uniform integer in `min..=max`.
///
/// # Errors
/// `InvalidArgument` unless `min < max`.
pub fn random_in_range(min: i32, max: i32) -> Result<i32> {
    if min >= max {
        return Err(CryptoError::InvalidArgument(format!(
            "max ({}) must be greater than min ({})",
            max, min
        )));
    }
    let mut rng = SecureRandom::new()?;
    Ok(rng.gen_range(min..=max))
}
