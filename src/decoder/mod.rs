//! Decoder: turn base64 text into bytes and deliver them
//!
//! A decode call runs in three stages:
//!
//! 1. resolve the [`Source`] into base64 text and check its shape,
//! 2. decode the text into a byte buffer,
//! 3. route the buffer to the console representation or to a file.
//!
//! Everything that can be checked without touching the source or the output
//! file is checked first, so a rejected call leaves no partial output.

mod builder;
mod options;

pub use builder::DecoderBuilder;
pub use options::{DecodeOptions, OutputMode, Utf8Policy, ValidationPolicy};

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::host::{ClipboardReader, FileOpener, Interaction};
use crate::input::Source;
use crate::utils::base64::strip_whitespace;
use crate::utils::fs::write_file;
use crate::utils::{decode_base64, ensure_writable_target, read_regular_file, validate_base64};

/// Question asked after the output file has been written
pub const OPEN_PROMPT: &str = "Open the file?";

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The bytes as UTF-8 text
    Text(String),
    /// The raw bytes
    Bytes(Vec<u8>),
    /// The bytes were written to a file
    Written(WriteReport),
}

/// Details of a file write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub open: OpenOutcome,
}

/// What happened after asking whether to open the written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Declined,
    Opened,
    /// Launching failed; the write itself still succeeded
    Failed(String),
}

/// Base64 decoder with its output options and host collaborators
pub struct Decoder {
    options: DecodeOptions,
    clipboard: Box<dyn ClipboardReader>,
    opener: Box<dyn FileOpener>,
    interaction: Box<dyn Interaction>,
}

impl Default for Decoder {
    fn default() -> Self {
        DecoderBuilder::new().build()
    }
}

impl Decoder {
    /// Start configuring a decoder
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode the source and deliver the bytes according to the options
    pub fn decode(&self, source: &Source) -> Result<Decoded> {
        if let Source::Literal(text) = source {
            check_literal(text)?;
        }
        if let Some(path) = &self.options.out_file {
            ensure_writable_target(path)?;
        }

        let text = self.resolve_text(source)?;
        let bytes = decode_base64(&text)?;
        debug!("Decoded {} bytes from {}", bytes.len(), source.describe());

        match &self.options.out_file {
            Some(path) => self.write_out(path, bytes).map(Decoded::Written),
            None => self.render(bytes),
        }
    }

    fn resolve_text(&self, source: &Source) -> Result<String> {
        let raw = match source {
            Source::Literal(text) => return Ok(text.clone()),
            Source::File(path) => {
                let data = read_regular_file(path)?;
                String::from_utf8_lossy(&data).into_owned()
            }
            Source::Clipboard => self.clipboard.read_text()?,
        };

        let text = strip_whitespace(&raw);
        if text.is_empty() {
            // An empty file is what encoding an empty file produces
            if let Source::File(_) = source {
                return Ok(text);
            }
            return Err(Error::InvalidArgument(format!(
                "The {} holds no base64 text",
                source.describe()
            )));
        }

        if self.options.validation == ValidationPolicy::Uniform {
            validate_base64(&text)?;
        }
        Ok(text)
    }

    fn render(&self, bytes: Vec<u8>) -> Result<Decoded> {
        match (self.options.output_mode, self.options.utf8) {
            (OutputMode::Bytes, _) => Ok(Decoded::Bytes(bytes)),
            (OutputMode::Text, Utf8Policy::Strict) => Ok(Decoded::Text(String::from_utf8(bytes)?)),
            (OutputMode::Text, Utf8Policy::Lossy) => {
                Ok(Decoded::Text(String::from_utf8_lossy(&bytes).into_owned()))
            }
        }
    }

    fn write_out(&self, path: &Path, bytes: Vec<u8>) -> Result<WriteReport> {
        if self.options.output_mode == OutputMode::Bytes {
            warn!("Byte output is ignored when writing to a file");
        }

        write_file(path, &bytes)?;
        info!("Wrote {} bytes to {}", bytes.len(), path.display());

        self.interaction.notify(&format!(
            "Decoded {} bytes and wrote to: '{}'",
            bytes.len(),
            path.display()
        ));

        let open = if self.interaction.confirm(OPEN_PROMPT) {
            match self.opener.open(path) {
                Ok(()) => OpenOutcome::Opened,
                Err(e) => {
                    warn!("Could not open '{}': {}", path.display(), e);
                    OpenOutcome::Failed(e.to_string())
                }
            }
        } else {
            OpenOutcome::Declined
        };

        Ok(WriteReport {
            path: path.to_path_buf(),
            bytes: bytes.len(),
            open,
        })
    }
}

fn check_literal(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::InvalidArgument("The base64 string is empty".to_string()));
    }
    validate_base64(text)
}

/// Decode literal base64 into UTF-8 text
pub fn decode_text(text: &str) -> Result<String> {
    match Decoder::default().decode(&Source::Literal(text.to_string()))? {
        Decoded::Text(text) => Ok(text),
        other => Err(Error::InvalidArgument(format!("Unexpected output: {:?}", other))),
    }
}

/// Decode literal base64 into bytes
pub fn decode_bytes(text: &str) -> Result<Vec<u8>> {
    let decoder = Decoder::builder()
        .with_output_mode(OutputMode::Bytes)
        .build();
    match decoder.decode(&Source::Literal(text.to_string()))? {
        Decoded::Bytes(bytes) => Ok(bytes),
        other => Err(Error::InvalidArgument(format!("Unexpected output: {:?}", other))),
    }
}
