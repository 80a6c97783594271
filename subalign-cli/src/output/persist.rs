//! Atomic persistence of alignment results
//!
//! The result file is written as a whole via a temp file in the same
//! directory and renamed into place; a partially written result is never
//! observable. Deleting is idempotent: an absent file is not an error.

use anyhow::{Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `bytes` to `path` atomically
pub fn persist_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .context("failed to write result file")?;
    tmp.persist(path)
        .with_context(|| format!("failed to move result into place at {}", path.display()))?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Delete a persisted result; returns whether a file was actually removed
pub fn delete_result(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => {
            Err(err).with_context(|| format!("failed to delete {}", path.display()))
        }
    }
}
