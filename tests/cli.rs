//! End-to-end CLI tests
//!
//! Drives the compiled binary through the informational and error paths
//! that need no external transfer tools.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snaprotate() -> Command {
    Command::cargo_bin("snaprotate").unwrap()
}

fn write_definition(dir: &Path, text: &str) -> String {
    let file = dir.join("backup.yaml");
    fs::write(&file, text).unwrap();
    file.to_string_lossy().to_string()
}

#[test]
fn print_template_needs_no_definition_file() {
    snaprotate()
        .arg("--print-template")
        .assert()
        .success()
        .stdout(predicate::str::contains("profiles:"))
        .stdout(predicate::str::contains("PROFILE NAME"));
}

#[test]
fn template_output_loads_back() {
    let temp = TempDir::new().unwrap();

    let output = snaprotate().arg("-t").output().unwrap();
    let file = write_definition(temp.path(), &String::from_utf8(output.stdout).unwrap());

    snaprotate()
        .args(["--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available backup profiles:"))
        .stdout(predicate::str::contains("PROFILE NAME"));
}

#[test]
fn missing_definition_file_lists_candidates() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-definitions.yaml");

    snaprotate()
        .args(["--file", &missing.to_string_lossy()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Definition file not found:"))
        .stdout(predicate::str::contains("no-such-definitions.yaml"));
}

#[test]
fn validation_errors_are_reported_together() {
    let temp = TempDir::new().unwrap();
    let file = write_definition(
        temp.path(),
        r#"
profiles:
  - name: documents
    source: /src
    target: /dst
  - name: documents
    source: /src2
    target: /dst2
  - name: photos
    target: /dst3
"#,
    );

    snaprotate()
        .args(["--file", &file])
        .arg("documents")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error while parsing definition file:",
        ))
        .stdout(predicate::str::contains(
            "A profile with this name already exists.",
        ))
        .stdout(predicate::str::contains("Field 'source' is required."));
}

#[test]
fn no_profile_argument_lists_available_profiles() {
    let temp = TempDir::new().unwrap();
    let file = write_definition(
        temp.path(),
        r#"
profiles:
  - name: documents
    description: Home documents
    source: /src
    target: /dst
"#,
    );

    snaprotate()
        .args(["--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available backup profiles:"))
        .stdout(predicate::str::contains("documents"))
        .stdout(predicate::str::contains("Home documents"));
}

#[test]
fn unknown_profile_fails_and_lists_available() {
    let temp = TempDir::new().unwrap();
    let file = write_definition(
        temp.path(),
        r#"
profiles:
  - name: documents
    source: /src
    target: /dst
"#,
    );

    snaprotate()
        .args(["--file", &file])
        .arg("nope")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Profile \"nope\" not found"))
        .stdout(predicate::str::contains("Available backup profiles:"));
}

#[test]
fn profile_details_show_the_configuration() {
    let temp = TempDir::new().unwrap();
    let file = write_definition(
        temp.path(),
        r#"
profiles:
  - name: documents
    source: /src
    target: /dst
    mode: incremental
    count: 5
"#,
    );

    snaprotate()
        .args(["--file", &file, "-p", "documents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile"))
        .stdout(predicate::str::contains("/src"))
        .stdout(predicate::str::contains("/dst"))
        .stdout(predicate::str::contains("incremental"))
        .stdout(predicate::str::contains("5"));
}

#[test]
fn backup_with_missing_source_fails_per_profile() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("backups");
    fs::create_dir(&target).unwrap();
    let file = write_definition(
        temp.path(),
        &format!(
            r#"
profiles:
  - name: documents
    source: {}
    target: {}
"#,
            temp.path().join("gone").display(),
            target.display()
        ),
    );

    snaprotate()
        .args(["--file", &file])
        .arg("documents")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Precondition failed"))
        .stderr(predicate::str::contains("Source does not exist"));
}

#[test]
fn restore_with_unknown_date_fails() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("data");
    let target = temp.path().join("backups");
    fs::create_dir(&source).unwrap();
    fs::create_dir(&target).unwrap();
    fs::create_dir(target.join("2024-01-01")).unwrap();
    let file = write_definition(
        temp.path(),
        &format!(
            r#"
profiles:
  - name: documents
    source: {}
    target: {}
    mode: incremental
"#,
            source.display(),
            target.display()
        ),
    );

    snaprotate()
        .args(["--file", &file])
        .args(["--restore", "--restore-date", "1999-01-01"])
        .arg("documents")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snapshot not found"))
        .stderr(predicate::str::contains("1999-01-01"));
}
