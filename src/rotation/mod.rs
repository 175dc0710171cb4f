//! Snapshot rotation core
//!
//! This module contains the decision and orchestration logic for rotated
//! directory-tree backups:
//!
//! - `analyzer`: inspects a snapshot root and decides what to use, clone
//!   and delete for one pass
//! - `preflight`: precondition checks run before any destructive action
//! - `engine`: sequences backup and restore passes over the injected
//!   external operations

pub mod analyzer;
pub mod engine;
pub mod preflight;

pub use analyzer::{analyze, is_snapshot_name, list_snapshots, RotationDecision};
pub use engine::RotationEngine;
