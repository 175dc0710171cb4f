//! Snapshot set analysis
//!
//! Inspects the snapshot root of an incremental profile and decides which
//! directory today's backup writes into, which existing snapshot to clone
//! from, and which snapshot has aged out.
//!
//! Snapshot directories are named by date (`YYYY-MM-DD`). The match is purely
//! lexical: a name like `2024-13-99` is accepted, because rotation only
//! depends on the lexical ordering of the fixed-width names, not on calendar
//! correctness.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::{SnapError, SnapResult};

/// Pattern a directory base name must fully match to count as a snapshot
const SNAPSHOT_NAME_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Date format used for snapshot directory names
pub const SNAPSHOT_DATE_FORMAT: &str = "%Y-%m-%d";

fn snapshot_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SNAPSHOT_NAME_PATTERN).expect("pattern is valid"))
}

/// Check whether a directory base name is a snapshot name
pub fn is_snapshot_name(name: &str) -> bool {
    snapshot_name_regex().is_match(name)
}

/// Outcome of analyzing a snapshot root for one backup pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationDecision {
    /// Directory today's backup writes into (`root/<today>`)
    pub use_dir: PathBuf,

    /// Newest existing snapshot to hard-link clone from; `None` when no
    /// prior snapshot exists or the newest one is already today's directory
    pub clone_source: Option<PathBuf>,

    /// The single oldest snapshot that has aged out; `None` while the
    /// snapshot count is below the retention count
    pub delete_candidate: Option<PathBuf>,
}

/// List the immediate snapshot subdirectories of `root`, oldest first
///
/// Entries that are not directories or whose names do not match the snapshot
/// pattern are silently ignored.
pub fn list_snapshots(root: &Path) -> SnapResult<BTreeSet<PathBuf>> {
    let mut snapshots = BTreeSet::new();

    let entries = fs::read_dir(root).map_err(|e| {
        SnapError::Io(format!(
            "Failed to read snapshot root {}: {}",
            root.display(),
            e
        ))
    })?;

    for entry in entries {
        let entry = entry
            .map_err(|e| SnapError::Io(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if is_snapshot_name(&entry.file_name().to_string_lossy()) {
            snapshots.insert(path);
        }
    }

    Ok(snapshots)
}

/// Analyze the snapshot root for one backup pass
///
/// All snapshot names share the fixed-width, zero-padded date layout, so the
/// lexical ordering used here is also chronological for valid dates. At most
/// one directory is ever marked for deletion per call: retention is enforced
/// incrementally, one run at a time, not by bulk pruning.
pub fn analyze(root: &Path, retention_count: u32, today: NaiveDate) -> SnapResult<RotationDecision> {
    let use_dir = root.join(today.format(SNAPSHOT_DATE_FORMAT).to_string());

    let snapshots = list_snapshots(root)?;

    let mut clone_source = None;
    let mut delete_candidate = None;

    if let Some(newest) = snapshots.iter().next_back() {
        if *newest != use_dir {
            clone_source = Some(newest.clone());
            if snapshots.len() >= retention_count as usize {
                delete_candidate = snapshots.iter().next().cloned();
            }
        }
        // newest == use_dir is a same-day re-run: nothing to clone from
        // itself, and nothing ages out either
    }

    debug!("Folder to use:    {}", use_dir.display());
    debug!("Folder to copy:   {:?}", clone_source);
    debug!("Folder to delete: {:?}", delete_candidate);

    Ok(RotationDecision {
        use_dir,
        clone_source,
        delete_candidate,
    })
}
