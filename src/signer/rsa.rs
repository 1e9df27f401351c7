// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::{CryptoError, Result};
use crate::key::rsa_keys;
use log::debug;
use ring::signature::{RsaKeyPair, RsaPublicKeyComponents};

/// SHA256withRSA (RSASSA-PKCS1-v1_5) 签名
///
/// PKCS#1 v1.5 signatures are deterministic: one key and message always give
/// the same signature.
pub struct RsaSigner;

impl RsaSigner {
    /// Signs `data` with a PKCS#8 DER private key.
    pub fn sign(private_key_der: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let key_pair = RsaKeyPair::from_pkcs8(private_key_der)
            .map_err(|e| CryptoError::KeyError(format!("Invalid RSA PKCS#8 key: {}", e)))?;

        let mut signature = vec![0u8; key_pair.public().modulus_len()];
        let rng = ring::rand::SystemRandom::new();

        debug!(
            "SHA256withRSA sign: {} bytes with RSA-{}",
            data.len(),
            signature.len() * 8
        );

        key_pair
            .sign(&ring::signature::RSA_PKCS1_SHA256, &rng, data, &mut signature)
            .map_err(|_| CryptoError::SigningFailed("RSA signing failed".into()))?;

        Ok(signature)
    }

    /// Checks `signature` over `data` against an X.509 DER public key.
    ///
    /// Returns `Ok(false)` for any signature that does not verify, including
    /// one of the wrong length. Only undecodable key bytes are an error.
    pub fn verify(public_key_der: &[u8], data: &[u8], signature: &[u8]) -> Result<bool> {
        let public_key = rsa_keys::decode_public_key(public_key_der)?;
        let (n, e) = rsa_keys::public_components(&public_key);

        debug!(
            "SHA256withRSA verify: {} bytes, {} byte signature",
            data.len(),
            signature.len()
        );

        let components = RsaPublicKeyComponents { n, e };
        match components.verify(
            &ring::signature::RSA_PKCS1_2048_8192_SHA256,
            data,
            signature,
        ) {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}
