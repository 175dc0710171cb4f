//! snaprotate - profile-driven backup tool with rotated snapshots
//!
//! This library implements a rotation scheme for directory-tree backups.
//! Profiles define a source and a target directory; in incremental mode the
//! target holds dated snapshot directories (`YYYY-MM-DD`) where each new
//! snapshot starts as a hard-link clone of the previous one, so unmodified
//! files share storage. The oldest snapshot is deleted once the retention
//! count is reached, one snapshot per run. The actual data transfer is
//! delegated to external tools (`rsync`, `cp -al`, `rm -rf`).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: definition-file discovery and profile loading
//! - `error`: custom error types
//! - `models`: profile and run-option records
//! - `rotation`: snapshot analysis, precondition checks, and the engine
//!   sequencing backup and restore passes
//! - `ops`: the external delete/clone/mirror operations
//! - `prompt`: interactive confirmation
//! - `display`: terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use snaprotate::models::RunOptions;
//! use snaprotate::ops::SystemOps;
//! use snaprotate::prompt::StdinConfirm;
//! use snaprotate::rotation::RotationEngine;
//!
//! let options = RunOptions::default();
//! let ops = SystemOps::new(&options);
//! let engine = RotationEngine::new(&ops, &StdinConfirm);
//! engine.backup(&profile, &options)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod ops;
pub mod prompt;
pub mod rotation;

pub use error::{SnapError, SnapResult};
