// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::shared_key_pair;
use cryptokit::RsaSigner;

#[test]
fn test_rsa_sign_and_verify() {
    let pair = shared_key_pair();
    let message = b"Hello, RSA signature!";

    let signature = pair.private.sign(message).unwrap();
    assert_eq!(signature.len(), pair.public.modulus_len());
    assert!(pair.public.verify(message, &signature).unwrap());

    // 修改后的消息验证失败
    assert!(!pair.public.verify(b"Hello, RSA signature?", &signature).unwrap());
}

#[test]
fn test_rsa_signature_is_deterministic() {
    let pair = shared_key_pair();
    let a = RsaSigner::sign(pair.private.as_der(), b"deterministic").unwrap();
    let b = RsaSigner::sign(pair.private.as_der(), b"deterministic").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rsa_signature_with_different_messages() {
    let pair = shared_key_pair();

    // 测试不同长度的消息
    for len in [0, 1, 32, 1000, 100_000] {
        let message = vec![0x5au8; len];
        let signature = pair.private.sign(&message).unwrap();
        assert!(pair.public.verify(&message, &signature).unwrap());
    }
}

#[test]
fn test_rsa_signature_bit_flip() {
    let pair = shared_key_pair();
    let signature = pair.private.sign(b"flip").unwrap();

    let mut flipped = signature.clone();
    flipped[42] ^= 0x10;
    assert!(!pair.public.verify(b"flip", &flipped).unwrap());
    assert!(!pair.public.verify(b"flip", &[]).unwrap());
}
