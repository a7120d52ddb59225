use std::path::Path;
use std::process::{Command, Stdio};

use log::info;

use super::FileOpener;
use crate::error::{Error, Result};

/// Opens files with the desktop's default handler
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(path: &Path) -> Command {
        let mut cmd = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            // The empty string is the window title `start` expects first
            cmd.args(["/C", "start", ""]);
            cmd
        } else {
            Command::new("xdg-open")
        };
        cmd.arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        info!("Opening {}", path.display());

        let status = Self::command(path).status()?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::IoError(format!(
                "Opener for '{}' exited with {}",
                path.display(),
                status
            )))
        }
    }
}
