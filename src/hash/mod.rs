// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Message digests over the SHA-2 family.

pub mod hmac;


use crate::encoding;
use crate::types::DigestAlgorithm;
use log::trace;
use sha2::{Digest, Sha256, Sha384, Sha512};

pub trait HashAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;
    fn output_size(&self) -> usize;
    fn update(&mut self, data: &[u8]);
    fn finalize(&mut self) -> Vec<u8>;
    fn reset(&mut self);
}

/// Incremental hasher for any supported [`DigestAlgorithm`]
#[derive(Clone)]
pub enum Hasher {
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl Hasher {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha256 => Hasher::Sha256(Sha256::new()),
            DigestAlgorithm::Sha384 => Hasher::Sha384(Sha384::new()),
            DigestAlgorithm::Sha512 => Hasher::Sha512(Sha512::new()),
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            Hasher::Sha256(_) => DigestAlgorithm::Sha256,
            Hasher::Sha384(_) => DigestAlgorithm::Sha384,
            Hasher::Sha512(_) => DigestAlgorithm::Sha512,
        }
    }

    /// Absorbs `data`, returning `self` for chaining.
    pub fn chain(mut self, data: &[u8]) -> Self {
        HashAlgorithm::update(&mut self, data);
        self
    }

    /// Consumes the hasher and produces the digest.
    pub fn finish(mut self) -> HashDigest {
        let algorithm = self.algorithm();
        HashDigest {
            algorithm,
            bytes: HashAlgorithm::finalize(&mut self),
        }
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Hasher").field(&self.algorithm()).finish()
    }
}

impl HashAlgorithm for Hasher {
    fn name(&self) -> &'static str {
        match self {
            Hasher::Sha256(_) => "SHA-256",
            Hasher::Sha384(_) => "SHA-384",
            Hasher::Sha512(_) => "SHA-512",
        }
    }

    fn output_size(&self) -> usize {
        self.algorithm().output_size()
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Hasher::Sha256(h) => Digest::update(h, data),
            Hasher::Sha384(h) => Digest::update(h, data),
            Hasher::Sha512(h) => Digest::update(h, data),
        }
    }

    fn finalize(&mut self) -> Vec<u8> {
        match self {
            Hasher::Sha256(h) => h.finalize_reset().to_vec(),
            Hasher::Sha384(h) => h.finalize_reset().to_vec(),
            Hasher::Sha512(h) => h.finalize_reset().to_vec(),
        }
    }

    fn reset(&mut self) {
        match self {
            Hasher::Sha256(h) => Digest::reset(h),
            Hasher::Sha384(h) => Digest::reset(h),
            Hasher::Sha512(h) => Digest::reset(h),
        }
    }
}

/// A computed digest and the algorithm that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashDigest {
    algorithm: DigestAlgorithm,
    bytes: Vec<u8>,
}

impl HashDigest {
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn to_hex(&self) -> String {
        encoding::to_hex(&self.bytes)
    }

    pub fn to_base64(&self) -> String {
        encoding::to_base64(&self.bytes)
    }
}

impl AsRef<[u8]> for HashDigest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// Hashes `data` in one shot.
pub fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> HashDigest {
    trace!("{} digest: {} bytes", algorithm, data.len());
    Hasher::new(algorithm).chain(data).finish()
}

/// Hashes `salt` followed by `data`.
///
/// The salt is absorbed first, so the result equals `digest(salt || data)`.
pub fn digest_with_salt(algorithm: DigestAlgorithm, salt: &[u8], data: &[u8]) -> HashDigest {
    trace!(
        "{} salted digest: {} byte salt, {} bytes",
        algorithm,
        salt.len(),
        data.len()
    );
    Hasher::new(algorithm).chain(salt).chain(data).finish()
}

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> HashDigest {
    digest(DigestAlgorithm::Sha256, data)
}
