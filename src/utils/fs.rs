//! Whole-buffer file helpers

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Read the complete contents of an existing regular file
pub fn read_regular_file(path: &Path) -> Result<Vec<u8>, Error> {
    if !path.is_file() {
        return Err(Error::NotFound(format!(
            "File '{}' does not exist or is not a regular file",
            path.display()
        )));
    }

    fs::read(path)
        .map_err(|e| Error::IoError(format!("Failed to read file '{}': {}", path.display(), e)))
}

/// Check that `path` can receive a new file: its directory must exist and
/// the path itself must not be a directory
pub fn ensure_writable_target(path: &Path) -> Result<(), Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument("Output path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(Error::IoError(format!(
            "Output path '{}' is a directory",
            path.display()
        )));
    }

    // A bare file name has an empty parent, meaning the working directory
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(Error::IoError(format!(
                "Directory '{}' does not exist",
                parent.display()
            )))
        }
        _ => Ok(()),
    }
}

/// Write the buffer to `path`, replacing any existing file
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), Error> {
    fs::write(path, data)
        .map_err(|e| Error::IoError(format!("Failed to write file '{}': {}", path.display(), e)))
}
