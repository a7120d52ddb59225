//! Input selection for the encoder and decoder
//!
//! The command line exposes the inputs as separate flags. They are folded into
//! one of these sum types up front, so the operations match exhaustively and
//! never see a half-specified combination.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Data handed to the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Literal text; its UTF-8 bytes are encoded
    Text(String),
    /// A file whose raw bytes are encoded
    File(PathBuf),
}

impl Payload {
    /// Build a payload from the optional command line inputs, requiring exactly one
    pub fn from_args(string: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (string, file) {
            (Some(text), None) => Ok(Payload::Text(text)),
            (None, Some(path)) => Ok(Payload::File(path)),
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "A string and a file cannot both be supplied".to_string(),
            )),
            (None, None) => Err(Error::InvalidArgument(
                "Either a string or a file must be supplied".to_string(),
            )),
        }
    }
}

/// Where the decoder reads base64 text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Base64 text given directly
    Literal(String),
    /// A file holding base64 text
    File(PathBuf),
    /// The current text content of the system clipboard
    Clipboard,
}

impl Source {
    /// Build a source from the optional command line inputs, requiring exactly one
    pub fn from_args(string: Option<String>, file: Option<PathBuf>, clipboard: bool) -> Result<Self> {
        let supplied = [string.is_some(), file.is_some(), clipboard]
            .iter()
            .filter(|set| **set)
            .count();

        if supplied > 1 {
            return Err(Error::InvalidArgument(
                "Only one of a string, a file or the clipboard may be supplied".to_string(),
            ));
        }

        match (string, file, clipboard) {
            (Some(text), _, _) => Ok(Source::Literal(text)),
            (_, Some(path), _) => Ok(Source::File(path)),
            (_, _, true) => Ok(Source::Clipboard),
            _ => Err(Error::InvalidArgument(
                "One of a string, a file or the clipboard must be supplied".to_string(),
            )),
        }
    }

    /// Short description used in log messages
    pub fn describe(&self) -> String {
        match self {
            Source::Literal(_) => "literal".to_string(),
            Source::File(path) => format!("file '{}'", path.display()),
            Source::Clipboard => "clipboard".to_string(),
        }
    }
}
