use super::*;

use std::io::Write;

fn write_versionrc(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(".versionrc");
    let mut file = std::fs::File::create(&path).expect("create .versionrc");
    file.write_all(contents.as_bytes()).expect("write .versionrc");
    (dir, path)
}

#[test]
fn test_hidden_type_is_collected() {
    let (_dir, path) = write_versionrc(
        r#"{"types": [{"type": "chore", "hidden": true}, {"type": "feat", "section": "Features"}]}"#,
    );

    let hidden = hidden_types(&path);
    assert_eq!(hidden.len(), 1);
    assert!(hidden.contains("chore"));
}

#[test]
fn test_hidden_false_is_excluded() {
    let (_dir, path) =
        write_versionrc(r#"{"types": [{"type": "fix", "hidden": false}]}"#);

    assert!(hidden_types(&path).is_empty());
}

#[test]
fn test_entry_without_hidden_marker_is_excluded() {
    let (_dir, path) =
        write_versionrc(r#"{"types": [{"type": "feat", "section": "Features"}]}"#);

    assert!(hidden_types(&path).is_empty());
}

#[test]
fn test_missing_file_yields_empty_set() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(".versionrc");

    assert!(hidden_types(&path).is_empty());
}

#[test]
fn test_malformed_entry_is_skipped_and_valid_ones_kept() {
    let (_dir, path) = write_versionrc(
        r#"{"types": [
            {"hidden": true},
            {"type": "docs", "hidden": true},
            "not-an-object"
        ]}"#,
    );

    let hidden = hidden_types(&path);
    assert_eq!(hidden.len(), 1);
    assert!(hidden.contains("docs"));
}

#[test]
fn test_unparseable_file_yields_empty_set() {
    let (_dir, path) = write_versionrc("this is not json {{");

    assert!(hidden_types(&path).is_empty());
}

#[test]
fn test_file_without_types_array_yields_empty_set() {
    let (_dir, path) = write_versionrc(r##"{"header": "# Changelog"}"##);

    assert!(hidden_types(&path).is_empty());
}

#[test]
fn test_multiple_hidden_types_are_all_collected() {
    let (_dir, path) = write_versionrc(
        r#"{"types": [
            {"type": "chore", "hidden": true},
            {"type": "build", "hidden": true},
            {"type": "feat", "hidden": false}
        ]}"#,
    );

    let hidden = hidden_types(&path);
    assert_eq!(hidden.len(), 2);
    assert!(hidden.contains("chore"));
    assert!(hidden.contains("build"));
}
