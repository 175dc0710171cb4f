//! Display formatting for terminal output
//!
//! Formats profiles for terminal display as aligned label/value rows and
//! name/description listings.

use crate::models::{BackupMode, Profile};

/// Format the available-profiles listing
pub fn format_profile_list(profiles: &[Profile]) -> String {
    let mut output = String::from("Available backup profiles:\n");
    for profile in profiles {
        output.push_str(&format!(
            "  {:<15}: {}\n",
            profile.name,
            profile.description.as_deref().unwrap_or("")
        ));
    }
    output
}

/// Format the detail view of one profile
pub fn format_profile_detail(profile: &Profile) -> String {
    let mut output = String::new();
    output.push_str(&format!("===== {:<11}: {}\n", "Profile", profile.name));
    output.push_str(&format!(
        "  {:<15}: {}\n",
        "Description",
        profile.description.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  {:<15}: {}\n",
        "Source",
        profile.source.display()
    ));
    output.push_str(&format!(
        "  {:<15}: {}\n",
        "Target",
        profile.target.display()
    ));
    output.push_str(&format!("  {:<15}: {}\n", "Mode", profile.mode));
    output.push_str(&format!(
        "  {:<15}: {}\n",
        "Options",
        profile.options.join(" ")
    ));
    if profile.mode == BackupMode::Incremental {
        output.push_str(&format!(
            "  {:<15}: {}\n",
            "Backup count", profile.retention_count
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn profile(mode: BackupMode) -> Profile {
        Profile {
            name: "documents".to_string(),
            description: Some("Home documents".to_string()),
            source: PathBuf::from("/home/user/documents"),
            target: PathBuf::from("/backups/documents"),
            mode,
            options: vec!["-rltvzi".to_string()],
            retention_count: 5,
        }
    }

    #[test]
    fn test_profile_list() {
        let listing = format_profile_list(&[profile(BackupMode::Synchronize)]);
        assert!(listing.starts_with("Available backup profiles:"));
        assert!(listing.contains("documents"));
        assert!(listing.contains("Home documents"));
    }

    #[test]
    fn test_detail_shows_count_only_for_incremental() {
        let incremental = format_profile_detail(&profile(BackupMode::Incremental));
        assert!(incremental.contains("Backup count"));
        assert!(incremental.contains("5"));
        assert!(incremental.contains("incremental"));

        let synchronize = format_profile_detail(&profile(BackupMode::Synchronize));
        assert!(!synchronize.contains("Backup count"));
    }

    #[test]
    fn test_detail_lists_core_fields() {
        let detail = format_profile_detail(&profile(BackupMode::Incremental));
        assert!(detail.contains("/home/user/documents"));
        assert!(detail.contains("/backups/documents"));
        assert!(detail.contains("-rltvzi"));
    }
}
