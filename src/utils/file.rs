// File utilities for report output

use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// File utilities for report output
pub struct FileUtils;

impl FileUtils {
    /// Remove a file if it exists. Returns whether anything was removed.
    pub fn remove_if_exists(path: &Path) -> Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove stale file: {}", path.display()))
            }
        }
    }

    /// Write content through a temporary file that is renamed into place.
    pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
        AtomicFile::new(path, AllowOverwrite)
            .write(|file| file.write_all(content))
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    /// Serialize `value` as indented JSON and write it atomically.
    pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        let mut content = serde_json::to_vec_pretty(value)
            .with_context(|| format!("Failed to serialize report for: {}", path.display()))?;
        content.push(b'\n');
        Self::write_atomic(path, &content)
    }

    /// Read file content
    pub fn read_file(path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
