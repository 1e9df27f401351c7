// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Key material held by the caller.
//!
//! Keys are plain immutable byte buffers: AES keys as raw bytes, RSA keys in
//! their DER interchange form (X.509 SubjectPublicKeyInfo for public keys,
//! PKCS#8 for private keys). Engines decode them per call and retain nothing.

pub mod derivation;
pub mod generator;
pub mod rsa_keys;


use crate::asymmetric::{RsaCipher, RsaPadding};
use crate::error::Result;
use crate::memory::SecretBytes;
use crate::random::SecureRandom;
use crate::signer::RsaSigner;
use crate::types::AesKeySize;

pub use derivation::{Pbkdf2, Pbkdf2Prf};
pub use generator::{generate_key_pair, generate_symmetric_key, KeyGenerator};

/// AES key of 128, 192 or 256 bits
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey {
    size: AesKeySize,
    bytes: SecretBytes,
}

impl SymmetricKey {
    /// Wraps existing key bytes; the length must be 16, 24 or 32.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let size = AesKeySize::from_len(bytes.len())?;
        Ok(Self {
            size,
            bytes: SecretBytes::from_slice(bytes),
        })
    }

    pub fn generate(size: AesKeySize) -> Result<Self> {
        let mut bytes = vec![0u8; size.bytes()];
        SecureRandom::new()?.fill(&mut bytes)?;
        Ok(Self {
            size,
            bytes: SecretBytes::new(bytes),
        })
    }

    pub fn size(&self) -> AesKeySize {
        self.size
    }

    pub fn bits(&self) -> u32 {
        self.size.bits()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// RSA public key as DER SubjectPublicKeyInfo
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    der: Vec<u8>,
    modulus_len: usize,
}

impl PublicKey {
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let key = rsa_keys::decode_public_key(der)?;
        Ok(Self {
            der: der.to_vec(),
            modulus_len: rsa_keys::modulus_len(&key),
        })
    }

    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Modulus length in bytes
    pub fn modulus_len(&self) -> usize {
        self.modulus_len
    }

    pub fn key_bits(&self) -> usize {
        self.modulus_len * 8
    }

    pub fn encrypt(&self, padding: RsaPadding, plaintext: &[u8]) -> Result<Vec<u8>> {
        RsaCipher::encrypt(padding, &self.der, plaintext)
    }

    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<bool> {
        RsaSigner::verify(&self.der, data, signature)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey")
            .field("bits", &self.key_bits())
            .finish()
    }
}

/// RSA private key as DER PKCS#8, wiped on drop
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    der: SecretBytes,
    modulus_len: usize,
}

impl PrivateKey {
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let key = rsa_keys::decode_private_key(der)?;
        Ok(Self {
            der: SecretBytes::from_slice(der),
            modulus_len: rsa_keys::private_modulus_len(&key),
        })
    }

    pub fn as_der(&self) -> &[u8] {
        self.der.as_bytes()
    }

    pub fn modulus_len(&self) -> usize {
        self.modulus_len
    }

    pub fn key_bits(&self) -> usize {
        self.modulus_len * 8
    }

    pub fn decrypt(&self, padding: RsaPadding, ciphertext: &[u8]) -> Result<Vec<u8>> {
        RsaCipher::decrypt(padding, self.der.as_bytes(), ciphertext)
    }

    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        RsaSigner::sign(self.der.as_bytes(), data)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bits", &self.key_bits())
            .finish_non_exhaustive()
    }
}

/// Public/private halves generated together.
///
/// Nothing checks that the halves share a modulus; the pair is trusted as
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsymmetricKeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl AsymmetricKeyPair {
    pub fn new(public: PublicKey, private: PrivateKey) -> Self {
        Self { public, private }
    }

    /// Generates an RSA key pair of `bits` (2048, 3072 or 4096).
    pub fn generate(bits: usize) -> Result<Self> {
        let private = rsa_keys::generate_rsa_private_key(bits)?;
        let public_der = rsa_keys::encode_public_key(&private.to_public_key())?;
        let private_der = rsa_keys::encode_private_key(&private)?;
        let modulus_len = rsa_keys::private_modulus_len(&private);

        Ok(Self {
            public: PublicKey {
                der: public_der,
                modulus_len,
            },
            private: PrivateKey {
                der: private_der,
                modulus_len,
            },
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}
