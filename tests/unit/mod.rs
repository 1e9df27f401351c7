// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptokit::AsymmetricKeyPair;
use std::sync::OnceLock;

pub mod cipher_test;
pub mod hash_test;
pub mod rsa_test;
pub mod signature_test;
pub mod xor_test;

static KEY_PAIR: OnceLock<AsymmetricKeyPair> = OnceLock::new();

/// RSA-2048 pair shared across the integration tests
pub fn shared_key_pair() -> &'static AsymmetricKeyPair {
    KEY_PAIR.get_or_init(|| cryptokit::key::generate_key_pair(2048).unwrap())
}
