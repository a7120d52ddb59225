//! Options controlling how decoded data is checked and delivered

use std::path::PathBuf;

/// How decoded bytes are shown on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Interpret the bytes as UTF-8 text
    #[default]
    Text,
    /// List the raw byte values
    Bytes,
}

/// Which sources get the base64 shape check before decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Literal, file and clipboard text are all checked
    #[default]
    Uniform,
    /// Only literal text is checked; file and clipboard text go straight to
    /// the codec
    LiteralOnly,
}

/// What to do when text output is requested but the bytes are not UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Fail with an encoding error
    #[default]
    Strict,
    /// Substitute U+FFFD for invalid sequences
    Lossy,
}

/// Decoder options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Console representation, ignored when writing to a file
    pub output_mode: OutputMode,

    /// Write the decoded bytes here instead of returning them
    pub out_file: Option<PathBuf>,

    /// Shape check policy
    pub validation: ValidationPolicy,

    /// UTF-8 handling for text output
    pub utf8: Utf8Policy,
}
