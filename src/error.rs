//! Error types for b64kit

use thiserror::Error;

/// Errors that can occur while encoding or decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input is missing or empty, or exclusive inputs were combined
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input text does not have the shape of Base64
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A referenced file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reading, writing or launching failed
    #[error("IO error: {0}")]
    IoError(String),

    /// The codec rejected the input
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Decoded bytes are not valid UTF-8
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Result type using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::DecodeError(format!("Failed to decode base64: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::EncodingError(format!("Decoded data is not valid UTF-8: {}", err))
    }
}
