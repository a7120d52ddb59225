//! # b64kit: Base64 encoding and decoding for the command line
//!
//! `b64kit` backs the `b64` and `d64` commands. The encoder turns a string or
//! the bytes of a file into standard, padded Base64. The decoder reads Base64
//! from a string, a file or the clipboard, checks it, and either returns the
//! decoded text or bytes, or writes them to a file and offers to open it.
//!
//! ## Example
//!
//! ```
//! use b64kit::{decoder, encoder, Payload};
//!
//! let encoded = encoder::encode(&Payload::Text("hello world".into())).unwrap();
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decoder::decode_text(&encoded).unwrap(), "hello world");
//! ```
//!
//! Clipboard access, the open-file prompt and launching files go through the
//! traits in [`host`], so the decoder can be driven without a terminal or a
//! desktop session.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod host;
pub mod input;
pub mod utils;

// Re-export commonly used types for convenience
pub use decoder::{DecodeOptions, Decoded, Decoder, DecoderBuilder, OpenOutcome, OutputMode};
pub use encoder::encode;
pub use error::{Error, Result};
pub use input::{Payload, Source};
