// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::{CryptoError, Result};
use serde::{Deserialize, Serialize};

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// IV length required by CBC
pub const CBC_IV_SIZE: usize = 16;

/// Accepted GCM nonce lengths
pub const GCM_NONCE_MIN: usize = 12;
pub const GCM_NONCE_MAX: usize = 16;

/// GCM authentication tag length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GcmTagLength {
    Bits96,
    Bits104,
    Bits112,
    Bits120,
    #[default]
    Bits128,
}

impl GcmTagLength {
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            96 => Ok(Self::Bits96),
            104 => Ok(Self::Bits104),
            112 => Ok(Self::Bits112),
            120 => Ok(Self::Bits120),
            128 => Ok(Self::Bits128),
            _ => Err(CryptoError::InvalidParameter(format!(
                "Unsupported GCM tag length: {} bits",
                bits
            ))),
        }
    }

    pub const fn bits(&self) -> u32 {
        match self {
            Self::Bits96 => 96,
            Self::Bits104 => 104,
            Self::Bits112 => 112,
            Self::Bits120 => 120,
            Self::Bits128 => 128,
        }
    }

    pub const fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }
}

/// 加密模式枚举
///
/// None of the modes pad. ECB and CBC therefore only accept block-aligned
/// input, while GCM runs in counter mode and accepts any length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherMode {
    /// Each block encrypted independently. Leaks plaintext patterns.
    Ecb,
    /// Cipher block chaining with a 16-byte IV
    Cbc,
    /// Galois/counter mode, ciphertext carries the tag appended
    Gcm(GcmTagLength),
}

impl CipherMode {
    /// GCM with the default 128-bit tag
    pub fn gcm() -> Self {
        CipherMode::Gcm(GcmTagLength::default())
    }

    pub fn requires_iv(&self) -> bool {
        matches!(self, CipherMode::Cbc | CipherMode::Gcm(_))
    }

    /// 判断模式是否要求块对齐
    pub fn requires_block_alignment(&self) -> bool {
        matches!(self, CipherMode::Cbc | CipherMode::Ecb)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, CipherMode::Gcm(_))
    }

    /// Fails with `BlockSize` when an aligned mode gets unaligned input.
    pub fn check_alignment(&self, length: usize) -> Result<()> {
        if self.requires_block_alignment() && length % BLOCK_SIZE != 0 {
            return Err(CryptoError::BlockSize {
                length,
                block_size: BLOCK_SIZE,
            });
        }
        Ok(())
    }

    /// Checks the IV/nonce against this mode and returns the one to use.
    ///
    /// ECB has no IV; anything supplied is ignored.
    pub fn check_iv<'a>(&self, iv: Option<&'a [u8]>) -> Result<Option<&'a [u8]>> {
        match self {
            CipherMode::Ecb => Ok(None),
            CipherMode::Cbc => match iv {
                Some(iv) if iv.len() == CBC_IV_SIZE => Ok(Some(iv)),
                Some(iv) => Err(CryptoError::InvalidParameter(format!(
                    "CBC requires a {}-byte IV, got {}",
                    CBC_IV_SIZE,
                    iv.len()
                ))),
                None => Err(CryptoError::InvalidParameter(
                    "CBC requires an IV".into(),
                )),
            },
            CipherMode::Gcm(_) => match iv {
                Some(nonce) if (GCM_NONCE_MIN..=GCM_NONCE_MAX).contains(&nonce.len()) => {
                    Ok(Some(nonce))
                }
                Some(nonce) => Err(CryptoError::InvalidParameter(format!(
                    "GCM requires a {}-{} byte nonce, got {}",
                    GCM_NONCE_MIN,
                    GCM_NONCE_MAX,
                    nonce.len()
                ))),
                None => Err(CryptoError::InvalidParameter(
                    "GCM requires a nonce".into(),
                )),
            },
        }
    }
}

impl std::fmt::Display for CipherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherMode::Ecb => write!(f, "ECB/NoPadding"),
            CipherMode::Cbc => write!(f, "CBC/NoPadding"),
            CipherMode::Gcm(tag) => write!(f, "GCM/NoPadding (tag {} bits)", tag.bits()),
        }
    }
}
