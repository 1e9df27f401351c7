// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::CryptoConfig;
use crate::error::{CryptoError, Result};
use crate::key::SymmetricKey;
use crate::types::AesKeySize;
use ring::pbkdf2;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use zeroize::Zeroize;

/// PBKDF2 pseudorandom function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pbkdf2Prf {
    #[default]
    HmacSha1,
    HmacSha256,
    HmacSha512,
}

impl Pbkdf2Prf {
    fn algorithm(&self) -> pbkdf2::Algorithm {
        match self {
            Pbkdf2Prf::HmacSha1 => pbkdf2::PBKDF2_HMAC_SHA1,
            Pbkdf2Prf::HmacSha256 => pbkdf2::PBKDF2_HMAC_SHA256,
            Pbkdf2Prf::HmacSha512 => pbkdf2::PBKDF2_HMAC_SHA512,
        }
    }
}

pub struct Pbkdf2;

impl Pbkdf2 {
    /// Stretches `password` into `key_len_bits` bits of output.
    pub fn derive(
        prf: Pbkdf2Prf,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_len_bits: usize,
    ) -> Result<Vec<u8>> {
        let iterations = Self::check_iterations(iterations)?;
        if key_len_bits == 0 || key_len_bits % 8 != 0 {
            return Err(CryptoError::InvalidArgument(format!(
                "PBKDF2 key length must be a positive multiple of 8 bits, got {}",
                key_len_bits
            )));
        }

        log::trace!(
            "PBKDF2 {:?}: {} iterations, {} bit output",
            prf,
            iterations,
            key_len_bits
        );

        let mut derived = vec![0u8; key_len_bits / 8];
        pbkdf2::derive(prf.algorithm(), iterations, salt, password, &mut derived);
        Ok(derived)
    }

    /// Derivation with the configured PRF, iteration count and output length
    pub fn derive_with_config(
        config: &CryptoConfig,
        password: &[u8],
        salt: &[u8],
    ) -> Result<Vec<u8>> {
        Self::derive(
            config.pbkdf2_prf,
            password,
            salt,
            config.pbkdf2_iterations,
            config.pbkdf2_key_bits,
        )
    }

    /// Derives an AES key with PBKDF2-HMAC-SHA256.
    pub fn derive_key(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        size: AesKeySize,
    ) -> Result<SymmetricKey> {
        let mut derived = Self::derive(
            Pbkdf2Prf::HmacSha256,
            password,
            salt,
            iterations,
            size.bits() as usize,
        )?;
        let key = SymmetricKey::from_bytes(&derived);

        // 清零派生过程中的敏感数据
        derived.zeroize();

        key
    }

    /// Constant-time check of a previously derived value.
    pub fn verify(
        prf: Pbkdf2Prf,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        previously_derived: &[u8],
    ) -> Result<bool> {
        let iterations = Self::check_iterations(iterations)?;
        Ok(pbkdf2::verify(
            prf.algorithm(),
            iterations,
            salt,
            password,
            previously_derived,
        )
        .is_ok())
    }

    fn check_iterations(iterations: u32) -> Result<NonZeroU32> {
        NonZeroU32::new(iterations).ok_or_else(|| {
            CryptoError::InvalidArgument("PBKDF2 iteration count must be non-zero".into())
        })
    }
}
