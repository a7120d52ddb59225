//! Utility functions shared by the encoder and decoder

pub mod base64;
pub mod fs;

// Re-export commonly used utilities
pub use self::base64::{decode_base64, encode_base64, validate_base64};
pub use self::fs::{ensure_writable_target, read_regular_file};
