// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HMAC over the SHA-2 family.

use super::HashDigest;
use crate::error::{CryptoError, Result};
use crate::types::DigestAlgorithm;
use hmac::{Hmac, Mac};
use log::trace;
use sha2::{Sha256, Sha384, Sha512};

macro_rules! keyed {
    ($digest:ty, $key:expr, $data:expr) => {{
        let mut mac = <Hmac<$digest> as Mac>::new_from_slice($key)
            .map_err(|e| CryptoError::InvalidArgument(format!("Invalid HMAC key: {}", e)))?;
        mac.update($data);
        mac
    }};
}

/// Computes HMAC-`algorithm` of `data` under `key`.
///
/// Any key length is accepted.
pub fn hmac(algorithm: DigestAlgorithm, key: &[u8], data: &[u8]) -> Result<HashDigest> {
    trace!("HMAC-{}: {} bytes", algorithm, data.len());
    let bytes = match algorithm {
        DigestAlgorithm::Sha256 => keyed!(Sha256, key, data).finalize().into_bytes().to_vec(),
        DigestAlgorithm::Sha384 => keyed!(Sha384, key, data).finalize().into_bytes().to_vec(),
        DigestAlgorithm::Sha512 => keyed!(Sha512, key, data).finalize().into_bytes().to_vec(),
    };
    Ok(HashDigest { algorithm, bytes })
}

/// Checks `tag` in constant time. A tag of the wrong length is `false`.
pub fn verify(algorithm: DigestAlgorithm, key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
    let verified = match algorithm {
        DigestAlgorithm::Sha256 => keyed!(Sha256, key, data).verify_slice(tag).is_ok(),
        DigestAlgorithm::Sha384 => keyed!(Sha384, key, data).verify_slice(tag).is_ok(),
        DigestAlgorithm::Sha512 => keyed!(Sha512, key, data).verify_slice(tag).is_ok(),
    };
    Ok(verified)
}
