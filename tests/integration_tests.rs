use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_with_invalid_json_file() {
    let fixture = fixture_path("invalid.json");

    cargo_bin_cmd!()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_cli_with_duplicate_options() {
    let fixture = fixture_path("duplicate.txt");

    cargo_bin_cmd!()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate option value: alpha"));
}

#[test]
fn test_cli_with_invalid_json_on_stdin() {
    cargo_bin_cmd!()
        .write_stdin("[1, 2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.json")
        .assert()
        .failure();
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick one or many options"))
        .stdout(predicate::str::contains("--single"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hyfi"));
}

#[test]
fn test_cli_single_conflicts_with_multiple() {
    cargo_bin_cmd!()
        .args(["--single", "--multiple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_fixture_files_exist() {
    // Verify all our test fixtures are present
    assert!(fixture_path("strings.json").exists());
    assert!(fixture_path("labeled.json").exists());
    assert!(fixture_path("plain.txt").exists());
    assert!(fixture_path("duplicate.txt").exists());
    assert!(fixture_path("invalid.json").exists());
}

#[test]
fn test_fixtures_parse_as_options() {
    let strings = hyfi::options::parse_options(
        &fs::read_to_string(fixture_path("strings.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(strings.len(), 3);
    assert_eq!(strings[1].value, "beta");
    assert_eq!(strings[1].label, "beta");

    let labeled = hyfi::options::parse_options(
        &fs::read_to_string(fixture_path("labeled.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(labeled[0].label, "API service");
    assert_eq!(labeled[2].label, "db");

    let plain =
        hyfi::options::parse_options(&fs::read_to_string(fixture_path("plain.txt")).unwrap())
            .unwrap();
    assert_eq!(plain.len(), 3);
    assert_eq!(plain[1].label, "Web frontend");
    assert_eq!(plain[2].value, "db");
}
