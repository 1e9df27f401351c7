// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Text encodings for binary data: Base64 (standard alphabet, padded),
//! lowercase hex and zero-padded binary strings.

use crate::error::{CryptoError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Decodes Base64 and interprets the result as UTF-8.
pub fn from_base64_to_string(text: &str) -> Result<String> {
    Ok(String::from_utf8(from_base64(text)?)?)
}

pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Accepts upper or lower case digits.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Hex text broken into lines of `chunk` characters.
pub fn to_hex_split(bytes: &[u8], chunk: usize) -> Result<String> {
    if chunk == 0 {
        return Err(CryptoError::InvalidArgument(
            "chunk size must be positive".into(),
        ));
    }

    let hex: Vec<char> = to_hex(bytes).chars().collect();
    Ok(hex
        .chunks(chunk)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Binary digits of `value`, left-padded with '0' to `width`. Never truncates.
pub fn to_binary_padded(value: u64, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

/// Decodes `byte` as US-ASCII; bytes above 0x7f become U+FFFD.
pub fn byte_to_ascii(byte: u8) -> String {
    if byte.is_ascii() {
        char::from(byte).to_string()
    } else {
        char::REPLACEMENT_CHARACTER.to_string()
    }
}
