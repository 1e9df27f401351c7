// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! RSA encryption under PKCS#1 v1.5 or OAEP padding.
//!
//! Both schemes are probabilistic. Plaintext above the scheme's limit is
//! rejected up front; it is never chunked or truncated. Decryption failures
//! are collapsed into a single [`CryptoError::DecryptionFailed`] so callers
//! cannot tell a wrong key from a damaged ciphertext.


use crate::error::{CryptoError, Result};
use crate::key::rsa_keys;
use crate::random::SecureRandom;
use log::debug;
use rsa::{Oaep, Pkcs1v15Encrypt};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// PKCS#1 v1.5 overhead in bytes
const PKCS1V15_OVERHEAD: usize = 11;

/// SHA-256 output length used by OAEP
const OAEP_HASH_LEN: usize = 32;

/// RSA encryption padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsaPadding {
    /// RSAES-PKCS1-v1_5
    Pkcs1v15,
    /// RSAES-OAEP with SHA-256 as both the label hash and the MGF1 hash
    OaepSha256,
}

impl RsaPadding {
    /// Largest plaintext accepted for a modulus of `modulus_len` bytes
    pub fn max_plaintext_len(&self, modulus_len: usize) -> usize {
        let overhead = match self {
            RsaPadding::Pkcs1v15 => PKCS1V15_OVERHEAD,
            RsaPadding::OaepSha256 => 2 * OAEP_HASH_LEN + 2,
        };
        modulus_len.saturating_sub(overhead)
    }

    // Label hash and MGF1 hash are both SHA-256.
    fn oaep() -> Oaep {
        Oaep::new_with_mgf_hash::<Sha256, Sha256>()
    }
}

impl std::fmt::Display for RsaPadding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RsaPadding::Pkcs1v15 => write!(f, "RSA/PKCS1Padding"),
            RsaPadding::OaepSha256 => write!(f, "RSA/OAEPWithSHA-256AndMGF1Padding"),
        }
    }
}

/// RSA encrypt/decrypt over DER-encoded keys
pub struct RsaCipher;

impl RsaCipher {
    /// Encrypts with an X.509 SubjectPublicKeyInfo DER key.
    ///
    /// # Errors
    /// `InputTooLarge` when `plaintext` exceeds
    /// [`RsaPadding::max_plaintext_len`], `KeyError` for undecodable key bytes.
    pub fn encrypt(padding: RsaPadding, public_key_der: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let public_key = rsa_keys::decode_public_key(public_key_der)?;
        let modulus_len = rsa_keys::modulus_len(&public_key);

        let max = padding.max_plaintext_len(modulus_len);
        if plaintext.len() > max {
            return Err(CryptoError::InputTooLarge {
                max,
                actual: plaintext.len(),
            });
        }

        debug!(
            "{} encrypt: {} bytes with RSA-{}",
            padding,
            plaintext.len(),
            modulus_len * 8
        );

        let mut rng = SecureRandom::new()?;
        let result = match padding {
            RsaPadding::Pkcs1v15 => public_key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext),
            RsaPadding::OaepSha256 => public_key.encrypt(&mut rng, RsaPadding::oaep(), plaintext),
        };
        result.map_err(|e| CryptoError::EncryptionFailed(format!("RSA encryption failed: {}", e)))
    }

    /// Decrypts with a PKCS#8 DER private key.
    ///
    /// # Errors
    /// `DecryptionFailed` for any ciphertext that does not open under this key
    /// and scheme, `KeyError` for undecodable key bytes.
    pub fn decrypt(padding: RsaPadding, private_key_der: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let private_key = rsa_keys::decode_private_key(private_key_der)?;

        debug!("{} decrypt: {} bytes", padding, ciphertext.len());

        // Blinded private-key operation
        let mut rng = SecureRandom::new().map_err(|_| CryptoError::DecryptionFailed)?;
        let result = match padding {
            RsaPadding::Pkcs1v15 => {
                private_key.decrypt_blinded(&mut rng, Pkcs1v15Encrypt, ciphertext)
            }
            RsaPadding::OaepSha256 => {
                private_key.decrypt_blinded(&mut rng, RsaPadding::oaep(), ciphertext)
            }
        };
        result.map_err(|_| CryptoError::DecryptionFailed)
    }
}
