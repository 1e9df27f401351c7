// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! AES-GCM with 12 to 16 byte nonces and 96 to 128 bit tags.
//!
//! Output layout is `ciphertext || tag`. Nonces other than 96 bits go through
//! GHASH to form the initial counter block.

use crate::cipher::mode::{CipherMode, GcmTagLength};
use crate::error::{CryptoError, Result};
use crate::key::SymmetricKey;
use crate::types::AesKeySize;
use aes_gcm::aead::consts::{U12, U13, U14, U15, U16};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use aes_gcm::AesGcm;

fn seal<C: KeyInit + Aead>(key: &[u8], nonce: &[u8], aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;
    cipher
        .encrypt(
            GenericArray::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| CryptoError::EncryptionFailed("AES-GCM seal failed".into()))
}

fn open<C: KeyInit + Aead>(key: &[u8], nonce: &[u8], aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;
    cipher
        .decrypt(
            GenericArray::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| CryptoError::Authentication)
}

macro_rules! with_tag {
    ($op:ident, $aes:ty, $nonce:ty, $tag:expr, $($arg:expr),+) => {
        match $tag {
            GcmTagLength::Bits96 => $op::<AesGcm<$aes, $nonce, U12>>($($arg),+),
            GcmTagLength::Bits104 => $op::<AesGcm<$aes, $nonce, U13>>($($arg),+),
            GcmTagLength::Bits112 => $op::<AesGcm<$aes, $nonce, U14>>($($arg),+),
            GcmTagLength::Bits120 => $op::<AesGcm<$aes, $nonce, U15>>($($arg),+),
            GcmTagLength::Bits128 => $op::<AesGcm<$aes, $nonce, U16>>($($arg),+),
        }
    };
}

macro_rules! with_nonce {
    ($op:ident, $aes:ty, $nonce_len:expr, $tag:expr, $($arg:expr),+) => {
        match $nonce_len {
            12 => with_tag!($op, $aes, U12, $tag, $($arg),+),
            13 => with_tag!($op, $aes, U13, $tag, $($arg),+),
            14 => with_tag!($op, $aes, U14, $tag, $($arg),+),
            15 => with_tag!($op, $aes, U15, $tag, $($arg),+),
            16 => with_tag!($op, $aes, U16, $tag, $($arg),+),
            other => Err(CryptoError::InvalidParameter(format!(
                "Unsupported GCM nonce length: {}",
                other
            ))),
        }
    };
}

macro_rules! with_cipher {
    ($op:ident, $size:expr, $nonce_len:expr, $tag:expr, $($arg:expr),+) => {
        match $size {
            AesKeySize::Aes128 => with_nonce!($op, Aes128, $nonce_len, $tag, $($arg),+),
            AesKeySize::Aes192 => with_nonce!($op, Aes192, $nonce_len, $tag, $($arg),+),
            AesKeySize::Aes256 => with_nonce!($op, Aes256, $nonce_len, $tag, $($arg),+),
        }
    };
}

pub fn encrypt(
    key: &SymmetricKey,
    tag: GcmTagLength,
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    CipherMode::Gcm(tag).check_iv(Some(nonce))?;
    let key_bytes = key.as_bytes();
    with_cipher!(seal, key.size(), nonce.len(), tag, key_bytes, nonce, aad, plaintext)
}

/// Verifies the tag and only then returns the plaintext.
pub fn decrypt(
    key: &SymmetricKey,
    tag: GcmTagLength,
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    CipherMode::Gcm(tag).check_iv(Some(nonce))?;
    if ciphertext.len() < tag.bytes() {
        return Err(CryptoError::Authentication);
    }
    let key_bytes = key.as_bytes();
    with_cipher!(open, key.size(), nonce.len(), tag, key_bytes, nonce, aad, ciphertext)
}
