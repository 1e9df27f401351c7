// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptokit::hash::{digest, digest_with_salt, hmac};
use cryptokit::{DigestAlgorithm, Hash};

#[test]
fn test_hash_is_deterministic() {
    let input = b"Hello world!";
    assert_eq!(Hash::sha256(input), Hash::sha256(input));
}

#[test]
fn test_hash_sensitivity() {
    // 尾部多一个字符
    let a = Hash::sha256(b"Hello world!");
    let b = Hash::sha256(b"Hello world!!");
    assert_ne!(a, b);
    assert_ne!(a.to_hex(), b.to_hex());
}

#[test]
fn test_hash_length_is_fixed() {
    for len in [0usize, 1, 55, 56, 64, 1 << 16] {
        let hash = digest(DigestAlgorithm::Sha256, &vec![b'x'; len]);
        assert_eq!(hash.len(), 32);
        assert_eq!(hash.to_hex().len(), 64);
    }
}

#[test]
fn test_salted_hash() {
    let password = b"correct horse battery staple";
    let salt = cryptokit::random::random_bytes(16).unwrap();

    let first = Hash::sha256_salted(&salt, password);
    assert_eq!(first, Hash::sha256_salted(&salt, password));
    assert_ne!(first, Hash::sha256(password));

    let other_salt = cryptokit::random::random_bytes(16).unwrap();
    assert_ne!(first, Hash::sha256_salted(&other_salt, password));

    let mut joined = salt.clone();
    joined.extend_from_slice(password);
    assert_eq!(first, digest_with_salt(DigestAlgorithm::Sha256, &salt, password));
    assert_eq!(first, Hash::sha256(&joined));
}

#[test]
fn test_hmac_roundtrip() {
    let key = cryptokit::random::random_bytes(32).unwrap();
    let tag = Hash::hmac_sha256(&key, b"message").unwrap();
    assert_eq!(tag.len(), 32);
    assert!(hmac::verify(DigestAlgorithm::Sha256, &key, b"message", tag.as_bytes()).unwrap());
    assert!(!hmac::verify(DigestAlgorithm::Sha256, &key, b"massage", tag.as_bytes()).unwrap());
}
