//! Precondition checks run before any destructive action
//!
//! Backup and restore both refuse to start when the source is missing or
//! empty, or when the target directory does not exist. Target emptiness is
//! deliberately not checked: an incremental target legitimately already
//! contains prior snapshots.

use std::fs;
use std::path::Path;

use crate::error::{SnapError, SnapResult};

/// Validate source and target before a transfer
pub fn check(source: &Path, target: &Path) -> SnapResult<()> {
    if !source.exists() {
        return Err(SnapError::Precondition(format!(
            "Source does not exist: {}",
            source.display()
        )));
    }
    if dir_entry_count(source)? == 0 {
        return Err(SnapError::Precondition(format!(
            "Source is empty: {}",
            source.display()
        )));
    }
    if !target.exists() {
        return Err(SnapError::Precondition(format!(
            "Target does not exist: {}",
            target.display()
        )));
    }
    Ok(())
}

fn dir_entry_count(dir: &Path) -> SnapResult<usize> {
    let entries = fs::read_dir(dir)
        .map_err(|e| SnapError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;
    Ok(entries.count())
}
