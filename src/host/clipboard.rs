use std::process::{Command, Stdio};

use log::debug;

use super::ClipboardReader;
use crate::error::{Error, Result};

/// Reads the clipboard by running the platform's paste tool
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

type PasteCommand = (&'static str, &'static [&'static str]);

/// Candidate commands in the order they are tried
#[cfg(target_os = "macos")]
const PASTE_COMMANDS: &[PasteCommand] = &[("pbpaste", &[])];

#[cfg(windows)]
const PASTE_COMMANDS: &[PasteCommand] = &[(
    "powershell.exe",
    &["-NoProfile", "-NonInteractive", "-Command", "Get-Clipboard -Raw"],
)];

#[cfg(not(any(target_os = "macos", windows)))]
const PASTE_COMMANDS: &[PasteCommand] = &[
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
];

impl ClipboardReader for SystemClipboard {
    fn read_text(&self) -> Result<String> {
        let mut failures = Vec::new();

        for (program, args) in PASTE_COMMANDS {
            debug!("Reading clipboard with {}", program);

            let output = Command::new(program)
                .args(*args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output();

            match output {
                Ok(output) if output.status.success() => {
                    return String::from_utf8(output.stdout).map_err(|e| {
                        Error::EncodingError(format!("Clipboard text is not UTF-8: {}", e))
                    });
                }
                Ok(output) => failures.push(format!(
                    "{} exited with {}: {}",
                    program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )),
                Err(e) => failures.push(format!("{}: {}", program, e)),
            }
        }

        Err(Error::IoError(format!(
            "Failed to read the clipboard ({})",
            failures.join("; ")
        )))
    }
}
