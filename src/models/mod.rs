//! Core data models for snaprotate
//!
//! The profile describing one backup relationship and the per-invocation
//! run options.

pub mod profile;

pub use profile::{BackupMode, Profile, RunOptions, DEFAULT_RETENTION_COUNT};
