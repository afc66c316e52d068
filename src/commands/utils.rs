//! Shared filesystem helpers for commands
//!
//! Every check is existence-gated: a missing file is a normal state.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a text file, or `None` if it does not exist
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| Error::io(path, e))
}

/// Write a file, creating its parent directories
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Delete a file if present, returning whether anything was removed
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    Ok(true)
}

/// Delete a directory if it exists and holds nothing, returning whether it was removed
pub fn remove_dir_if_empty(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    let is_empty = fs::read_dir(path)
        .map_err(|e| Error::io(path, e))?
        .next()
        .is_none();
    if !is_empty {
        return Ok(false);
    }
    fs::remove_dir(path).map_err(|e| Error::io(path, e))?;
    Ok(true)
}
