//! Rotation orchestration
//!
//! Sequences one backup or restore pass for a profile: precondition checks,
//! snapshot analysis, deletion of the aged-out snapshot, hard-link cloning
//! of the newest one, and finally the mirror transfer. The engine owns the
//! decision logic only; the mutating operations are injected via
//! [`SnapshotOps`] and the restore confirmation via [`Confirm`].
//!
//! There is no rollback between steps: if the delete succeeds and the clone
//! then fails, the run stops and the deleted snapshot stays gone. Simulate
//! mode runs the full decision logic while the injected operations suppress
//! their side effects.

use std::path::Path;

use chrono::{Local, NaiveDate};

use super::analyzer::RotationDecision;
use super::{analyzer, preflight};
use crate::error::{SnapError, SnapResult};
use crate::models::{BackupMode, Profile, RunOptions};
use crate::ops::{MirrorOptions, SnapshotOps};
use crate::prompt::Confirm;

/// Drives backup and restore passes over injected operations
pub struct RotationEngine<'a> {
    ops: &'a dyn SnapshotOps,
    confirm: &'a dyn Confirm,
}

impl<'a> RotationEngine<'a> {
    /// Create a new RotationEngine
    pub fn new(ops: &'a dyn SnapshotOps, confirm: &'a dyn Confirm) -> Self {
        Self { ops, confirm }
    }

    /// Back up a profile, rotating snapshots in incremental mode
    pub fn backup(&self, profile: &Profile, options: &RunOptions) -> SnapResult<()> {
        self.backup_on(profile, options, Local::now().date_naive())
    }

    /// Restore a profile, writing the backup back to its source directory
    pub fn restore(&self, profile: &Profile, options: &RunOptions) -> SnapResult<()> {
        self.restore_on(profile, options, Local::now().date_naive())
    }

    /// Backup pass with an explicit date, so tests can pin "today"
    pub fn backup_on(
        &self,
        profile: &Profile,
        options: &RunOptions,
        today: NaiveDate,
    ) -> SnapResult<()> {
        let source = profile.source.clone();
        let mut target = profile.target.clone();
        preflight::check(&source, &target)?;

        println!("===== Backup profile: {}", profile.name);
        let mut info = format!(
            "Starting backup from {} to {}",
            source.display(),
            target.display()
        );
        if options.simulate {
            info.push_str(" (dry-run)");
        }
        println!("{}", info);
        println!();

        if profile.mode == BackupMode::Incremental {
            let RotationDecision {
                use_dir,
                clone_source,
                delete_candidate,
            } = analyzer::analyze(&target, profile.retention_count, today)?;

            if let Some(delete_candidate) = &delete_candidate {
                println!("Removing oldest backup: {}", delete_candidate.display());
                self.ops.delete(delete_candidate)?;
            }

            if let Some(clone_source) = &clone_source {
                println!(
                    "Copying newest incremental backup: {}",
                    clone_source.display()
                );
                self.ops.clone_tree(clone_source, &use_dir)?;
            }

            // In a dry run the clone never created today's directory, so the
            // transfer is simulated against the newest existing snapshot
            target = match (options.simulate, clone_source) {
                (true, Some(clone_source)) => clone_source,
                _ => use_dir,
            };
        }

        self.sync_dirs(profile, &source, &target, options, false)
    }

    /// Restore pass with an explicit date, so tests can pin "today"
    pub fn restore_on(
        &self,
        profile: &Profile,
        options: &RunOptions,
        today: NaiveDate,
    ) -> SnapResult<()> {
        // Roles switch: the backup target is read, the source written
        let mut source = profile.target.clone();
        let target = profile.source.clone();
        preflight::check(&source, &target)?;

        println!("===== Restore profile: {}", profile.name);
        let mut info = format!(
            "Restore backup from {} to {}",
            source.display(),
            target.display()
        );
        if options.simulate {
            info.push_str(" (dry-run)");
        }
        println!("{}", info);
        println!();

        if profile.mode == BackupMode::Incremental {
            source = match &options.restore_date {
                Some(date) => source.join(date),
                None => {
                    // Use the latest snapshot; right after a same-day backup
                    // that is today's directory itself
                    let decision = analyzer::analyze(&source, profile.retention_count, today)?;
                    decision.clone_source.unwrap_or(decision.use_dir)
                }
            };

            if !source.exists() {
                return Err(SnapError::snapshot_not_found(source.display().to_string()));
            }
        }

        self.sync_dirs(profile, &source, &target, options, true)
    }

    /// Mirror `source` into `target`, optionally gated by a confirmation
    fn sync_dirs(
        &self,
        profile: &Profile,
        source: &Path,
        target: &Path,
        options: &RunOptions,
        prompt: bool,
    ) -> SnapResult<()> {
        println!(
            "Synchronizing from {} to {}",
            source.display(),
            target.display()
        );

        if prompt
            && !options.simulate
            && !self.confirm.confirm("Do you want to continue?", None)?
        {
            return Ok(());
        }

        let mirror_options = MirrorOptions {
            flags: profile.options.clone(),
            delete_extraneous: options.delete,
            dry_run: options.simulate,
        };
        self.ops.mirror(source, target, &mirror_options)
    }
}
