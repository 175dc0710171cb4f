//! Backup profile model
//!
//! Represents one configured backup relationship between a source and a
//! target directory, plus the per-invocation run options.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default number of incremental snapshots to keep
pub const DEFAULT_RETENTION_COUNT: u32 = 3;

/// How a profile transfers data to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupMode {
    /// Keep a single mirrored copy of the source, no history
    Synchronize,
    /// Keep dated, rotated snapshots sharing unmodified files via hard links
    Incremental,
}

impl BackupMode {
    /// Parse backup mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "synchronize" => Some(Self::Synchronize),
            "incremental" => Some(Self::Incremental),
            _ => None,
        }
    }
}

impl Default for BackupMode {
    fn default() -> Self {
        Self::Synchronize
    }
}

impl fmt::Display for BackupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synchronize => write!(f, "synchronize"),
            Self::Incremental => write!(f, "incremental"),
        }
    }
}

/// One backup relationship, loaded from the definition file
///
/// Profiles are constructed once by the loader and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile name, used to select it on the command line
    pub name: String,

    /// Optional free-text description shown in listings
    pub description: Option<String>,

    /// Directory that gets backed up
    pub source: PathBuf,

    /// Directory the backup is written to (for incremental mode, the parent
    /// of the dated snapshot directories)
    pub target: PathBuf,

    /// Transfer mode
    pub mode: BackupMode,

    /// Extra flags passed to the transfer tool; empty means use the built-in
    /// default flags
    pub options: Vec<String>,

    /// Maximum number of incremental snapshots kept before the oldest is
    /// deleted; only meaningful in incremental mode
    pub retention_count: u32,
}

/// Per-invocation flags that steer a backup or restore run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Dry-run: suppress every mutating operation, only show what would happen
    pub simulate: bool,

    /// Print executed commands and skip notices
    pub verbose: bool,

    /// Delete entries on the target that no longer exist on the source
    pub delete: bool,

    /// Restore from the snapshot with this date instead of the latest one
    pub restore_date: Option<String>,
}
