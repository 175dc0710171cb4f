//! Definition-file discovery
//!
//! Resolves the profile definition file by searching, in order:
//!
//! 1. the current working directory
//! 2. `~/.tools/`
//! 3. the directory containing the executable
//!
//! An absolute path is used verbatim and nothing else is searched.

use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{SnapError, SnapResult};

/// Find the profile definition file
///
/// Returns the first existing candidate together with the full ordered
/// candidate list, so callers can show where they looked when nothing
/// matched.
pub fn find_definition_file(file_name: &str) -> SnapResult<(Option<PathBuf>, Vec<PathBuf>)> {
    let candidates = candidate_paths(file_name)?;
    let found = candidates.iter().find(|p| p.exists()).cloned();
    Ok((found, candidates))
}

fn candidate_paths(file_name: &str) -> SnapResult<Vec<PathBuf>> {
    let given = Path::new(file_name);
    if given.is_absolute() {
        return Ok(vec![given.to_path_buf()]);
    }

    let mut candidates = Vec::new();

    let cwd = env::current_dir()
        .map_err(|e| SnapError::Io(format!("Failed to determine working directory: {}", e)))?;
    candidates.push(cwd.join(file_name));

    if let Some(base_dirs) = BaseDirs::new() {
        candidates.push(base_dirs.home_dir().join(".tools").join(file_name));
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            candidates.push(exe_dir.join(file_name));
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_absolute_path_is_the_only_candidate() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("backup.yaml");
        fs::write(&file, "profiles: []").unwrap();

        let (found, candidates) =
            find_definition_file(file.to_str().unwrap()).unwrap();
        assert_eq!(found, Some(file.clone()));
        assert_eq!(candidates, vec![file]);
    }

    #[test]
    fn test_missing_absolute_path_reports_candidates() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("nope.yaml");

        let (found, candidates) =
            find_definition_file(file.to_str().unwrap()).unwrap();
        assert_eq!(found, None);
        assert_eq!(candidates, vec![file]);
    }

    #[test]
    fn test_relative_name_searches_cwd_first() {
        let (_, candidates) =
            find_definition_file("snaprotate-test-definitely-missing.yaml").unwrap();
        assert!(!candidates.is_empty());
        let cwd = env::current_dir().unwrap();
        assert_eq!(
            candidates[0],
            cwd.join("snaprotate-test-definitely-missing.yaml")
        );
        // Remaining candidates keep the ~/.tools then exe-dir order
        for candidate in &candidates[1..] {
            assert!(candidate.ends_with("snaprotate-test-definitely-missing.yaml"));
        }
    }
}
