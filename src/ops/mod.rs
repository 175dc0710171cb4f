//! External snapshot operations
//!
//! The rotation engine sequences three operations it does not implement
//! itself: deleting an aged-out snapshot, cloning a snapshot as a hard-link
//! tree, and mirroring a directory's contents with a transfer tool. They are
//! modeled as a trait so the engine can be driven by a recording fake in
//! tests; the production implementation spawns blocking child processes.

mod runner;
mod system;

pub use runner::CommandRunner;
pub use system::{SystemOps, DEFAULT_MIRROR_FLAGS};

use std::path::Path;

use crate::error::SnapResult;

/// Options for one mirror transfer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorOptions {
    /// Transfer-tool flags from the profile; empty selects the built-in
    /// default flags
    pub flags: Vec<String>,

    /// Delete target entries that no longer exist on the source
    pub delete_extraneous: bool,

    /// Let the transfer tool report what it would do without writing
    pub dry_run: bool,
}

/// The external operations sequenced by the rotation engine
///
/// Every operation blocks until the underlying process has finished; step
/// N+1 depends on the file-system state step N produced.
pub trait SnapshotOps {
    /// Remove a whole snapshot subtree; no-op if the path is already absent
    fn delete(&self, path: &Path) -> SnapResult<()>;

    /// Recursively copy a snapshot tree using hard links; no-op if the
    /// source is absent or source and target are the same directory
    fn clone_tree(&self, source: &Path, target: &Path) -> SnapResult<()>;

    /// Synchronize the contents of `source` into `target`
    fn mirror(&self, source: &Path, target: &Path, options: &MirrorOptions) -> SnapResult<()>;
}
