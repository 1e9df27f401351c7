// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Input to a no-padding block mode is not block aligned.
    #[error("Input length {length} is not a multiple of the {block_size}-byte block size")]
    BlockSize { length: usize, block_size: usize },

    /// GCM tag mismatch. No plaintext is ever returned alongside this.
    #[error("Authentication tag verification failed")]
    Authentication,

    #[error("Input too large: maximum {max} bytes, got {actual}")]
    InputTooLarge { max: usize, actual: usize },

    /// Asymmetric decryption failed. Carries no detail on purpose.
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid key length: {0}")]
    InvalidKeyLength(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Insufficient entropy")]
    InsufficientEntropy,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<base64::DecodeError> for CryptoError {
    fn from(error: base64::DecodeError) -> Self {
        CryptoError::Decode(format!("invalid base64: {}", error))
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(error: hex::FromHexError) -> Self {
        CryptoError::Decode(format!("invalid hex: {}", error))
    }
}

impl From<std::string::FromUtf8Error> for CryptoError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        CryptoError::Decode(format!("invalid UTF-8: {}", error))
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
