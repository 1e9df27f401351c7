// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! RSA key generation and DER interchange.

use crate::error::{CryptoError, Result};
use crate::memory::SecretBytes;
use crate::random::SecureRandom;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

pub const SUPPORTED_RSA_KEY_SIZES: [usize; 3] = [2048, 3072, 4096];

/// Smallest modulus accepted on import; the signature verifier has the same floor.
pub const MIN_RSA_KEY_BITS: usize = 2048;

fn check_modulus_bits(bits: usize) -> Result<()> {
    if bits < MIN_RSA_KEY_BITS {
        return Err(CryptoError::KeyError(format!(
            "RSA-{} key is too small, minimum is {} bits",
            bits, MIN_RSA_KEY_BITS
        )));
    }
    Ok(())
}

pub fn generate_rsa_private_key(bits: usize) -> Result<RsaPrivateKey> {
    if !SUPPORTED_RSA_KEY_SIZES.contains(&bits) {
        return Err(CryptoError::KeyError(format!(
            "RSA key size {} is not supported, expected one of {:?}",
            bits, SUPPORTED_RSA_KEY_SIZES
        )));
    }

    log::debug!("generating RSA-{} key pair", bits);
    let mut rng = SecureRandom::new()?;
    RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| CryptoError::KeyError(format!("Failed to generate RSA key: {}", e)))
}

pub fn encode_private_key(key: &RsaPrivateKey) -> Result<SecretBytes> {
    let document = key.to_pkcs8_der().map_err(|e| {
        CryptoError::KeyError(format!("Failed to encode private key as PKCS#8: {}", e))
    })?;
    Ok(SecretBytes::from_slice(document.as_bytes()))
}

pub fn encode_public_key(key: &RsaPublicKey) -> Result<Vec<u8>> {
    let document = key.to_public_key_der().map_err(|e| {
        CryptoError::KeyError(format!("Failed to encode public key as X.509: {}", e))
    })?;
    Ok(document.as_bytes().to_vec())
}

/// Decodes PKCS#8 DER. Keys under [`MIN_RSA_KEY_BITS`] are a `KeyError`.
pub fn decode_private_key(der: &[u8]) -> Result<RsaPrivateKey> {
    let key = RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| CryptoError::KeyError(format!("Invalid RSA PKCS#8 key: {}", e)))?;
    check_modulus_bits(key.n().bits())?;
    Ok(key)
}

/// Decodes X.509 SubjectPublicKeyInfo DER. Keys under [`MIN_RSA_KEY_BITS`]
/// are a `KeyError`.
pub fn decode_public_key(der: &[u8]) -> Result<RsaPublicKey> {
    let key = RsaPublicKey::from_public_key_der(der)
        .map_err(|e| CryptoError::KeyError(format!("Invalid RSA X.509 public key: {}", e)))?;
    check_modulus_bits(key.n().bits())?;
    Ok(key)
}

/// Modulus length in bytes
pub fn modulus_len(key: &RsaPublicKey) -> usize {
    key.size()
}

pub fn private_modulus_len(key: &RsaPrivateKey) -> usize {
    key.size()
}

/// Big-endian modulus and exponent, as consumed by ring's verifier
pub fn public_components(key: &RsaPublicKey) -> (Vec<u8>, Vec<u8>) {
    (key.n().to_bytes_be(), key.e().to_bytes_be())
}
