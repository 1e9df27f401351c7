// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::key::AsymmetricKeyPair;
use std::sync::OnceLock;

static KEY_PAIR: OnceLock<AsymmetricKeyPair> = OnceLock::new();
static OTHER_KEY_PAIR: OnceLock<AsymmetricKeyPair> = OnceLock::new();

/// RSA-2048 pair shared by the unit tests; generation is slow.
pub fn rsa_key_pair() -> &'static AsymmetricKeyPair {
    KEY_PAIR.get_or_init(|| AsymmetricKeyPair::generate(2048).unwrap())
}

/// A second, unrelated RSA-2048 pair
pub fn other_rsa_key_pair() -> &'static AsymmetricKeyPair {
    OTHER_KEY_PAIR.get_or_init(|| AsymmetricKeyPair::generate(2048).unwrap())
}

/// RSA-1024 key built directly with the rsa crate, below the import floor.
/// Returns (SPKI DER, PKCS#8 DER).
pub fn weak_rsa_der() -> (Vec<u8>, Vec<u8>) {
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};

    let mut rng = crate::random::SecureRandom::new().unwrap();
    let key = rsa::RsaPrivateKey::new(&mut rng, 1024).unwrap();
    let public = key.to_public_key().to_public_key_der().unwrap();
    let private = key.to_pkcs8_der().unwrap();
    (public.as_bytes().to_vec(), private.as_bytes().to_vec())
}
