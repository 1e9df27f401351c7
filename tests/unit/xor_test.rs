// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptokit::xor;

#[test]
fn test_xor_with_generated_key() {
    let key = xor::generate_key(64).unwrap();
    assert_eq!(key.len(), 8);

    let message = b"Hello world! This message is longer than the key.";
    let encrypted = xor::xor(message, &key).unwrap();
    assert_ne!(&encrypted[..], &message[..]);
    assert_eq!(xor::xor(&encrypted, &key).unwrap(), message);
}

#[test]
fn test_xor_single_byte_key() {
    let encrypted = xor::xor(b"AAAA", &[0x20]).unwrap();
    assert_eq!(encrypted, b"aaaa");
}
