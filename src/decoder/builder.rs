//! Builder for configuring and creating decoders

use std::path::PathBuf;

use super::{DecodeOptions, Decoder, OutputMode, Utf8Policy, ValidationPolicy};
use crate::host::{
    ClipboardReader, FileOpener, Interaction, SystemClipboard, SystemOpener, TerminalInteraction,
};

/// Builder for creating and configuring decoders
pub struct DecoderBuilder {
    options: DecodeOptions,
    clipboard: Box<dyn ClipboardReader>,
    opener: Box<dyn FileOpener>,
    interaction: Box<dyn Interaction>,
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self {
            options: DecodeOptions::default(),
            clipboard: Box::new(SystemClipboard::new()),
            opener: Box::new(SystemOpener::new()),
            interaction: Box::new(TerminalInteraction::new()),
        }
    }
}

impl DecoderBuilder {
    /// Create a new builder with default options and the system collaborators
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options at once
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set how bytes are shown on the console
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.options.output_mode = mode;
        self
    }

    /// Write decoded bytes to a file instead of returning them
    pub fn with_out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.out_file = Some(path.into());
        self
    }

    /// Set which sources are shape checked
    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.options.validation = policy;
        self
    }

    /// Set UTF-8 handling for text output
    pub fn with_utf8_policy(mut self, policy: Utf8Policy) -> Self {
        self.options.utf8 = policy;
        self
    }

    /// Use a different clipboard reader
    pub fn with_clipboard(mut self, clipboard: impl ClipboardReader + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Use a different file opener
    pub fn with_opener(mut self, opener: impl FileOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Use a different notification and confirmation channel
    pub fn with_interaction(mut self, interaction: impl Interaction + 'static) -> Self {
        self.interaction = Box::new(interaction);
        self
    }

    /// Build the decoder
    pub fn build(self) -> Decoder {
        Decoder {
            options: self.options,
            clipboard: self.clipboard,
            opener: self.opener,
            interaction: self.interaction,
        }
    }
}
