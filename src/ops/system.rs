//! Production snapshot operations backed by system tools
//!
//! Delete is `rm -rf`, clone is `cp -al` (a recursive copy where every file
//! is a hard link sharing storage with its source until modified), and
//! mirror is `rsync`. In simulate mode, delete and clone only print their
//! would-be command; the mirror transfer still runs but with the dry-run
//! flag so the tool performs no writes and its output stays meaningful.

use std::path::Path;

use super::runner::CommandRunner;
use super::{MirrorOptions, SnapshotOps};
use crate::error::SnapResult;
use crate::models::RunOptions;

/// rsync flags used when a profile supplies no options of its own
pub const DEFAULT_MIRROR_FLAGS: &str = "-avi";

/// Snapshot operations that spawn `rm`, `cp` and `rsync`
#[derive(Debug, Clone)]
pub struct SystemOps {
    simulate: bool,
    verbose: bool,
    runner: CommandRunner,
}

impl SystemOps {
    /// Create system operations honoring the run's simulate/verbose flags
    pub fn new(options: &RunOptions) -> Self {
        Self {
            simulate: options.simulate,
            verbose: options.verbose,
            runner: CommandRunner::new(options.verbose),
        }
    }
}

impl SnapshotOps for SystemOps {
    fn delete(&self, path: &Path) -> SnapResult<()> {
        if !path.exists() {
            if self.verbose {
                println!("Folder does not exist: {}", path.display());
            }
            return Ok(());
        }
        let args = vec!["-rf".to_string(), path.display().to_string()];
        self.runner.run("rm", &args, self.simulate)
    }

    fn clone_tree(&self, source: &Path, target: &Path) -> SnapResult<()> {
        if !source.exists() {
            if self.verbose {
                println!("Source does not exist: {}", source.display());
            }
            return Ok(());
        }
        if source == target {
            if self.verbose {
                println!("Source and target are equal: {}", source.display());
            }
            return Ok(());
        }
        let args = vec![
            "-al".to_string(),
            source.display().to_string(),
            target.display().to_string(),
        ];
        self.runner.run("cp", &args, self.simulate)
    }

    fn mirror(&self, source: &Path, target: &Path, options: &MirrorOptions) -> SnapResult<()> {
        let args = mirror_args(source, target, options);
        // Dry runs are handled by the tool's own -n flag, not by skipping
        self.runner.run("rsync", &args, false)
    }
}

/// Build the rsync argument list for one transfer
fn mirror_args(source: &Path, target: &Path, options: &MirrorOptions) -> Vec<String> {
    let mut args = Vec::new();

    if options.flags.is_empty() {
        args.push(DEFAULT_MIRROR_FLAGS.to_string());
    } else {
        args.extend(options.flags.iter().cloned());
    }

    args.push("--progress".to_string());
    if options.delete_extraneous {
        args.push("--delete".to_string());
    }
    if options.dry_run {
        args.push("-n".to_string());
    }

    args.push(with_trailing_separator(source));
    args.push(with_trailing_separator(target));
    args
}

/// Append a trailing separator so the directory's *contents*, not the
/// directory itself, are synchronized into the target
fn with_trailing_separator(path: &Path) -> String {
    let mut rendered = path.display().to_string();
    if !rendered.ends_with('/') {
        rendered.push('/');
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn src() -> PathBuf {
        PathBuf::from("/data/documents")
    }

    fn dst() -> PathBuf {
        PathBuf::from("/backups/documents/2024-01-01")
    }

    #[test]
    fn test_mirror_args_default_flags() {
        let args = mirror_args(&src(), &dst(), &MirrorOptions::default());
        assert_eq!(
            args,
            vec![
                "-avi",
                "--progress",
                "/data/documents/",
                "/backups/documents/2024-01-01/",
            ]
        );
    }

    #[test]
    fn test_mirror_args_profile_flags_replace_default() {
        let options = MirrorOptions {
            flags: vec!["-rltvzi".to_string(), "--exclude=.cache".to_string()],
            ..Default::default()
        };
        let args = mirror_args(&src(), &dst(), &options);
        assert_eq!(args[0], "-rltvzi");
        assert_eq!(args[1], "--exclude=.cache");
        assert!(!args.contains(&"-avi".to_string()));
    }

    #[test]
    fn test_mirror_args_delete_and_dry_run() {
        let options = MirrorOptions {
            flags: Vec::new(),
            delete_extraneous: true,
            dry_run: true,
        };
        let args = mirror_args(&src(), &dst(), &options);
        assert_eq!(
            args,
            vec![
                "-avi",
                "--progress",
                "--delete",
                "-n",
                "/data/documents/",
                "/backups/documents/2024-01-01/",
            ]
        );
    }

    #[test]
    fn test_trailing_separator_is_not_doubled() {
        assert_eq!(with_trailing_separator(Path::new("/data/")), "/data/");
        assert_eq!(with_trailing_separator(Path::new("/data")), "/data/");
    }
}
