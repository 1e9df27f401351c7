// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::shared_key_pair;
use cryptokit::{CryptoError, PrivateKey, PublicKey, RsaCipher, RsaPadding};

#[test]
fn test_rsa_roundtrip_through_keys() {
    let pair = shared_key_pair();
    let message = b"This is an example that uses RSA to encrypt.";

    for padding in [RsaPadding::Pkcs1v15, RsaPadding::OaepSha256] {
        let ciphertext = pair.public.encrypt(padding, message).unwrap();
        assert_eq!(pair.private.decrypt(padding, &ciphertext).unwrap(), message);
    }
}

#[test]
fn test_rsa_2048_plaintext_limits() {
    let pair = shared_key_pair();

    let max = vec![b'a'; 245];
    assert!(pair.public.encrypt(RsaPadding::Pkcs1v15, &max).is_ok());

    let too_long = vec![b'a'; 300];
    assert_eq!(
        pair.public.encrypt(RsaPadding::Pkcs1v15, &too_long),
        Err(CryptoError::InputTooLarge {
            max: 245,
            actual: 300
        })
    );
    assert_eq!(
        pair.public.encrypt(RsaPadding::OaepSha256, &too_long),
        Err(CryptoError::InputTooLarge {
            max: 190,
            actual: 300
        })
    );
}

#[test]
fn test_rsa_empty_plaintext() {
    let pair = shared_key_pair();
    let ciphertext = RsaCipher::encrypt(RsaPadding::OaepSha256, pair.public.as_der(), b"").unwrap();
    assert!(RsaCipher::decrypt(RsaPadding::OaepSha256, pair.private.as_der(), &ciphertext)
        .unwrap()
        .is_empty());
}

#[test]
fn test_rsa_reimported_keys_interoperate() {
    let pair = shared_key_pair();
    let public = PublicKey::from_der(&pair.public.as_der().to_vec()).unwrap();
    let private = PrivateKey::from_der(&pair.private.as_der().to_vec()).unwrap();

    let ciphertext = public.encrypt(RsaPadding::Pkcs1v15, b"der").unwrap();
    assert_eq!(private.decrypt(RsaPadding::Pkcs1v15, &ciphertext).unwrap(), b"der");
}

#[test]
fn test_rsa_corrupted_ciphertext() {
    let pair = shared_key_pair();
    let ciphertext = pair.public.encrypt(RsaPadding::OaepSha256, b"payload").unwrap();

    let mut corrupted = ciphertext.clone();
    let last = corrupted.len() - 1;
    corrupted[last] ^= 0x55;
    assert_eq!(
        pair.private.decrypt(RsaPadding::OaepSha256, &corrupted),
        Err(CryptoError::DecryptionFailed)
    );
    assert_eq!(
        pair.private.decrypt(RsaPadding::OaepSha256, &[]),
        Err(CryptoError::DecryptionFailed)
    );
}
