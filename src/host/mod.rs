//! Host collaborators used by the decoder
//!
//! The decoder never touches the clipboard, the terminal or the desktop
//! directly. It goes through these interfaces, which the binaries fill with
//! the system implementations and tests replace with fakes.

mod clipboard;
mod interaction;
mod opener;

pub use clipboard::SystemClipboard;
pub use interaction::{AssumeNo, AssumeYes, TerminalInteraction};
pub use opener::SystemOpener;

use std::path::Path;

use crate::error::Result;

/// Source of clipboard text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardReader {
    /// Take a snapshot of the clipboard's text content
    fn read_text(&self) -> Result<String>;
}

/// Launches a file with the host's default application
#[cfg_attr(test, mockall::automock)]
pub trait FileOpener {
    /// Open the file, returning once the launch has been handed off
    fn open(&self, path: &Path) -> Result<()>;
}

/// Channel for telling the user what happened and asking yes/no questions
#[cfg_attr(test, mockall::automock)]
pub trait Interaction {
    /// Show an informational message
    fn notify(&self, message: &str);

    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> bool;
}
