use std::fs;
use std::path::{Path, PathBuf};

use classdef_cli::commands::{load_document, parse_annotation_base, parse_offset, ClassSpec};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn parse_offset_accepts_decimal_and_hex() {
    assert_eq!(parse_offset("112"), Ok(112));
    assert_eq!(parse_offset("0x70"), Ok(0x70));
    assert_eq!(parse_offset("0XfF"), Ok(0xff));
}

#[test]
fn parse_offset_rejects_garbage() {
    let err = parse_offset("0xzz").unwrap_err();
    assert!(err.contains("Invalid offset '0xzz'"), "unexpected error: {err}");
    assert!(parse_offset("-1").is_err());
}

#[test]
fn annotation_base_must_be_non_zero() {
    assert_eq!(parse_annotation_base("0x70"), Ok(0x70));
    let err = parse_annotation_base("0x0").unwrap_err();
    assert!(err.contains("offset 0 is reserved"), "unexpected error: {err}");
    assert!(parse_annotation_base("zero").unwrap_err().contains("Invalid offset 'zero'"));
}

#[test]
fn load_document_picks_json_by_extension() {
    let tmp = tempdir().expect("tempdir");
    let path = write(
        tmp.path(),
        "class.json",
        r#"{"type": "La;", "methods": [{"name": "run", "access": ["public"]}]}"#,
    );
    let spec: ClassSpec = load_document(&path).expect("load json");
    assert_eq!(spec.type_name, "La;");
    assert_eq!(spec.methods[0].return_type, "V", "return type defaults to void");
}

#[test]
fn load_document_reports_missing_file() {
    let tmp = tempdir().expect("tempdir");
    let err = load_document::<ClassSpec>(&tmp.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read class description"), "unexpected: {err}");
}

#[test]
fn load_document_reports_bad_yaml() {
    let tmp = tempdir().expect("tempdir");
    let path = write(tmp.path(), "bad.yaml", "type: [unterminated");
    let err = load_document::<ClassSpec>(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse class description YAML"));
}
