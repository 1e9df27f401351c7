// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cryptokit::key::generate_symmetric_key;
use cryptokit::random::random_nonce;
use cryptokit::{Cipher, CipherMode, CryptoError, GcmTagLength, SymmetricKey};

fn key128() -> SymmetricKey {
    generate_symmetric_key(128).unwrap()
}

#[test]
fn test_roundtrip_all_modes_and_key_sizes() {
    let plaintext = b"0123456789abcdef0123456789abcdef";

    for bits in [128, 192, 256] {
        let key = generate_symmetric_key(bits).unwrap();

        let ecb = Cipher::new(CipherMode::Ecb);
        let ct = ecb.encrypt(&key, None, plaintext).unwrap();
        assert_eq!(ct.len(), plaintext.len());
        assert_eq!(ecb.decrypt(&key, None, &ct).unwrap(), plaintext);

        let iv = random_nonce(16).unwrap();
        let cbc = Cipher::new(CipherMode::Cbc);
        let ct = cbc.encrypt(&key, Some(&iv), plaintext).unwrap();
        assert_eq!(cbc.decrypt(&key, Some(&iv), &ct).unwrap(), plaintext);

        let nonce = random_nonce(12).unwrap();
        let gcm = Cipher::new(CipherMode::gcm());
        let ct = gcm.encrypt(&key, Some(&nonce), plaintext).unwrap();
        assert_eq!(ct.len(), plaintext.len() + 16);
        assert_eq!(gcm.decrypt(&key, Some(&nonce), &ct).unwrap(), plaintext);
    }
}

#[test]
fn test_ecb_leaks_repeated_blocks() {
    let key = key128();
    let plaintext = b"Hello world!!!!!".repeat(3);
    let ct = Cipher::new(CipherMode::Ecb)
        .encrypt(&key, None, &plaintext)
        .unwrap();

    assert_eq!(ct.len(), 48);
    assert_eq!(ct[0..16], ct[16..32]);
    assert_eq!(ct[16..32], ct[32..48]);
}

#[test]
fn test_cbc_hides_repeated_blocks() {
    let key = key128();
    let iv = random_nonce(16).unwrap();
    let plaintext = b"Hello world!!!!!".repeat(3);
    let ct = Cipher::new(CipherMode::Cbc)
        .encrypt(&key, Some(&iv), &plaintext)
        .unwrap();

    assert_ne!(ct[0..16], ct[16..32]);
    assert_ne!(ct[16..32], ct[32..48]);
}

#[test]
fn test_unaligned_input_is_rejected() {
    let key = key128();
    let iv = [0u8; 16];
    let unaligned = vec![b'x'; 75];
    let aligned = vec![b'x'; 48];

    for mode in [CipherMode::Ecb, CipherMode::Cbc] {
        let cipher = Cipher::new(mode);
        assert_eq!(
            cipher.encrypt(&key, Some(&iv), &unaligned),
            Err(CryptoError::BlockSize {
                length: 75,
                block_size: 16
            })
        );
        assert_eq!(cipher.encrypt(&key, Some(&iv), &aligned).unwrap().len(), 48);
    }

    // GCM accepts any length
    let sealed = Cipher::new(CipherMode::gcm())
        .encrypt(&key, Some(&[0u8; 12]), &unaligned)
        .unwrap();
    assert_eq!(sealed.len(), 75 + 16);
}

#[test]
fn test_deterministic_modes() {
    let key = key128();
    let iv = [3u8; 16];
    let plaintext = [9u8; 32];

    for mode in [CipherMode::Ecb, CipherMode::Cbc] {
        let cipher = Cipher::new(mode);
        assert_eq!(
            cipher.encrypt(&key, Some(&iv), &plaintext).unwrap(),
            cipher.encrypt(&key, Some(&iv), &plaintext).unwrap()
        );
    }
}

#[test]
fn test_cbc_iv_sensitivity() {
    let key = key128();
    let cbc = Cipher::new(CipherMode::Cbc);
    let plaintext = [0u8; 32];

    let iv1 = [0u8; 16];
    let mut iv2 = iv1;
    iv2[15] = 1;

    let ct1 = cbc.encrypt(&key, Some(&iv1), &plaintext).unwrap();
    let ct2 = cbc.encrypt(&key, Some(&iv2), &plaintext).unwrap();
    assert_ne!(ct1, ct2);

    // 错误的 IV 只破坏第一个块
    let wrong = cbc.decrypt(&key, Some(&iv2), &ct1).unwrap();
    assert_ne!(wrong[..16], plaintext[..16]);
    assert_eq!(wrong[16..], plaintext[16..]);
}

#[test]
fn test_gcm_detects_any_bit_flip() {
    let key = key128();
    let nonce = random_nonce(12).unwrap();
    let gcm = Cipher::new(CipherMode::gcm());
    let sealed = gcm.encrypt(&key, Some(&nonce), b"authenticated data").unwrap();

    for index in 0..sealed.len() {
        let mut tampered = sealed.clone();
        tampered[index] ^= 0x01;
        assert_eq!(
            gcm.decrypt(&key, Some(&nonce), &tampered),
            Err(CryptoError::Authentication),
            "flip at byte {} went undetected",
            index
        );
    }

    let mut other_nonce = nonce.clone();
    other_nonce[0] ^= 0xff;
    assert_eq!(
        gcm.decrypt(&key, Some(&other_nonce), &sealed),
        Err(CryptoError::Authentication)
    );
}

#[test]
fn test_gcm_wrong_key_fails() {
    let nonce = [1u8; 12];
    let gcm = Cipher::new(CipherMode::gcm());
    let sealed = gcm.encrypt(&key128(), Some(&nonce), b"secret").unwrap();
    assert_eq!(
        gcm.decrypt(&key128(), Some(&nonce), &sealed),
        Err(CryptoError::Authentication)
    );
}

#[test]
fn test_gcm_tag_lengths() {
    let key = key128();
    let nonce = [0u8; 16];
    for (tag, len) in [
        (GcmTagLength::Bits96, 12),
        (GcmTagLength::Bits104, 13),
        (GcmTagLength::Bits112, 14),
        (GcmTagLength::Bits120, 15),
        (GcmTagLength::Bits128, 16),
    ] {
        let gcm = Cipher::new(CipherMode::Gcm(tag));
        let sealed = gcm.encrypt(&key, Some(&nonce), b"").unwrap();
        assert_eq!(sealed.len(), len);
        assert!(gcm.decrypt(&key, Some(&nonce), &sealed).unwrap().is_empty());
    }
}

#[test]
fn test_gcm_nonce_bounds() {
    let key = key128();
    let gcm = Cipher::new(CipherMode::gcm());
    for len in [0, 8, 11, 17, 32] {
        assert!(matches!(
            gcm.encrypt(&key, Some(&vec![0u8; len]), b"data"),
            Err(CryptoError::InvalidParameter(_))
        ));
    }
    assert!(matches!(
        gcm.encrypt(&key, None, b"data"),
        Err(CryptoError::InvalidParameter(_))
    ));
}
