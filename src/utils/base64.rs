//! Base64 encoding and decoding utilities
//!
//! This module wraps the standard (RFC 4648, padded) engine from the `base64`
//! crate and adds the shape check applied to decoder input.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref BASE64_SHAPE: Regex = Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").unwrap();
}

/// Encode data as base64
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode base64 data
pub fn decode_base64(data: &str) -> Result<Vec<u8>, Error> {
    Ok(STANDARD.decode(data)?)
}

/// Check that text only uses the base64 alphabet with at most two trailing `=`
pub fn is_base64_shaped(text: &str) -> bool {
    BASE64_SHAPE.is_match(text)
}

/// Reject text that is not shaped like base64
pub fn validate_base64(text: &str) -> Result<(), Error> {
    if is_base64_shaped(text) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "'{}' is not valid Base64",
            preview(text)
        )))
    }
}

/// Remove whitespace, which wrapped base64 from files and clipboards carries
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 40;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let head: String = text.chars().take(LIMIT).collect();
        format!("{}...", head)
    }
}
