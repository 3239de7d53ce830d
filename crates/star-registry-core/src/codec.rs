//! Body encoding: JSON text rendered as hex character codes.
//!
//! The payload is serialized with `serde_json`, then every character of the
//! resulting text is replaced by its code in lowercase hex, with no padding
//! and no separators. Decoding reads the body back two hex digits at a time
//! and maps each byte to the character with that code.
//!
//! This pairing is exact for characters with codes `0x20..=0xFF`. Anything
//! above `0xFF` renders as three or four digits on the way in but is read
//! back as two-digit pairs, so it does not survive a round trip. Astral
//! characters contribute only their leading UTF-16 surrogate. Stored bodies
//! depend on this exact rendering.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Write;

use crate::error::{CoreError, Result};

/// Encode a value into a block body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value).map_err(|e| CoreError::Encoding(e.to_string()))?;
    Ok(encode_text(&text))
}

/// Decode a block body back into a value.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let text = decode_text(body)?;
    serde_json::from_str(&text).map_err(|e| CoreError::Decoding(e.to_string()))
}

/// Render each character's leading UTF-16 code unit as unpadded hex.
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut units = [0u16; 2];
    for c in text.chars() {
        let unit = c.encode_utf16(&mut units)[0];
        // Writing into a String cannot fail.
        let _ = write!(out, "{:x}", unit);
    }
    out
}

/// Read two hex digits at a time back into Latin-1 characters.
///
/// A trailing lone digit is read as a group of its own.
pub fn decode_text(body: &str) -> Result<String> {
    body.as_bytes()
        .chunks(2)
        .map(|pair| {
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(CoreError::Decoding(format!(
                    "invalid hex digits {:?}",
                    String::from_utf8_lossy(pair)
                )));
            }
            let digits = std::str::from_utf8(pair)
                .map_err(|_| CoreError::Decoding("body is not ASCII hex".into()))?;
            u8::from_str_radix(digits, 16)
                .map(char::from)
                .map_err(|_| CoreError::Decoding(format!("invalid hex digits {:?}", digits)))
        })
        .collect()
}
