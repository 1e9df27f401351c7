// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Cryptokit
//!
//! A small cryptographic toolkit: AES in ECB/CBC/GCM without padding, RSA
//! encryption (PKCS#1 v1.5, OAEP-SHA256) and SHA256withRSA signatures,
//! SHA-2 digests, HMAC, PBKDF2, a toy XOR cipher and text encodings.
//!
//! Every operation is a synchronous function of its inputs. Keys are
//! immutable byte buffers owned by the caller.

pub mod asymmetric;
pub mod cipher;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod key;
pub mod memory;
pub mod random;
pub mod signer;
pub mod types;
pub mod xor;

#[cfg(test)]
pub(crate) mod test_utils;

pub use asymmetric::{RsaCipher, RsaPadding};
pub use cipher::{Cipher, CipherMode, GcmTagLength};
pub use config::CryptoConfig;
pub use error::{CryptoError, Result};
pub use hash::{HashDigest, Hasher};
pub use key::{
    AsymmetricKeyPair, KeyGenerator, Pbkdf2, Pbkdf2Prf, PrivateKey, PublicKey, SymmetricKey,
};
pub use memory::SecretBytes;
pub use random::SecureRandom;
pub use signer::RsaSigner;
pub use types::{AesKeySize, DigestAlgorithm};

/// High-level Hash API
pub struct Hash;

impl Hash {
    /// Calculate SHA-256 hash
    pub fn sha256(data: &[u8]) -> HashDigest {
        hash::sha256(data)
    }

    /// SHA-256 of `salt || data`
    pub fn sha256_salted(salt: &[u8], data: &[u8]) -> HashDigest {
        hash::digest_with_salt(DigestAlgorithm::Sha256, salt, data)
    }

    pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<HashDigest> {
        hash::hmac::hmac(DigestAlgorithm::Sha256, key, data)
    }
}
