//! Profile definition loading
//!
//! Parses the declarative YAML definition file into [`Profile`] values.
//! Parsing and validation are decoupled: every field is optional at parse
//! time, and a separate validation pass collects all problems of the file
//! into one list so they can be reported together.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::{SnapError, SnapResult};
use crate::models::{BackupMode, Profile, DEFAULT_RETENTION_COUNT};

/// A single problem found while validating profile definitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// A required key is absent
    #[error("{profile}: Field '{field}' is required.")]
    MissingField {
        profile: String,
        field: &'static str,
    },

    /// Two profiles share one name
    #[error("{profile}: A profile with this name already exists.")]
    DuplicateName { profile: String },

    /// The mode key holds something other than the two known modes
    #[error("{profile}: Unsupported mode: \"{mode}\" -> allowed values are \"incremental\" or \"synchronize\".")]
    UnsupportedMode { profile: String, mode: String },
}

/// Raw YAML shape of the definition file; validation is a separate pass
#[derive(Debug, Deserialize)]
struct RawDefinitions {
    #[serde(default)]
    profiles: Vec<RawProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    name: Option<String>,
    description: Option<String>,
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    mode: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    count: Option<u32>,
}

/// Read and parse a definition file
pub fn load_profiles(path: &Path) -> SnapResult<(Vec<Profile>, Vec<ProfileValidationError>)> {
    let text = fs::read_to_string(path).map_err(|e| {
        SnapError::Io(format!(
            "Failed to read definition file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_profiles(&text)
}

/// Parse definition text into profiles plus the aggregated validation errors
///
/// Profiles with validation problems are left out of the returned list; the
/// caller decides whether a non-empty error list aborts the run.
pub fn parse_profiles(text: &str) -> SnapResult<(Vec<Profile>, Vec<ProfileValidationError>)> {
    let raw: RawDefinitions = serde_yaml::from_str(text)
        .map_err(|e| SnapError::Config(format!("Failed to parse definition file: {}", e)))?;

    let mut profiles = Vec::new();
    let mut errors = Vec::new();
    let mut used_names: HashSet<String> = HashSet::new();

    for raw_profile in raw.profiles {
        let display_name = raw_profile
            .name
            .clone()
            .unwrap_or_else(|| "Undefined".to_string());
        let mut valid = true;

        match &raw_profile.name {
            None => {
                errors.push(ProfileValidationError::MissingField {
                    profile: display_name.clone(),
                    field: "name",
                });
                valid = false;
            }
            Some(name) => {
                if !used_names.insert(name.clone()) {
                    errors.push(ProfileValidationError::DuplicateName {
                        profile: display_name.clone(),
                    });
                    valid = false;
                }
            }
        }

        if raw_profile.source.is_none() {
            errors.push(ProfileValidationError::MissingField {
                profile: display_name.clone(),
                field: "source",
            });
            valid = false;
        }
        if raw_profile.target.is_none() {
            errors.push(ProfileValidationError::MissingField {
                profile: display_name.clone(),
                field: "target",
            });
            valid = false;
        }

        let mode = match &raw_profile.mode {
            None => BackupMode::default(),
            Some(raw_mode) => match BackupMode::parse(raw_mode) {
                Some(mode) => mode,
                None => {
                    errors.push(ProfileValidationError::UnsupportedMode {
                        profile: display_name.clone(),
                        mode: raw_mode.clone(),
                    });
                    valid = false;
                    BackupMode::default()
                }
            },
        };

        if !valid {
            continue;
        }

        // All required fields are present here
        if let (Some(name), Some(source), Some(target)) =
            (raw_profile.name, raw_profile.source, raw_profile.target)
        {
            profiles.push(Profile {
                name,
                description: raw_profile.description,
                source,
                target,
                mode,
                options: raw_profile.options,
                retention_count: raw_profile.count.unwrap_or(DEFAULT_RETENTION_COUNT),
            });
        }
    }

    Ok((profiles, errors))
}

/// A commented template for a new definition file
pub fn profile_template() -> String {
    format!(
        "\
# snaprotate profile definitions
profiles:
  - name: PROFILE NAME
    description: PROFILE DESCRIPTION
    source: SOURCE FOLDER
    target: TARGET FOLDER
    # Optional: {incremental} or {synchronize}
    mode: {default_mode}
    # Optional: one or more transfer-tool options
    options:
      - \"-rltvzi\"
    # Optional: max. number of incremental backups that must not be deleted
    count: {count}
",
        incremental = BackupMode::Incremental,
        synchronize = BackupMode::Synchronize,
        default_mode = BackupMode::default(),
        count = DEFAULT_RETENTION_COUNT,
    )
}
