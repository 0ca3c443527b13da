//! Unit tests covering input file checks and JSON output.

use super::helpers::Workspace;
use super::*;
use crate::io::{read_json, require_existing, write_json};
use crate::logging::default_directive;
use rstest::rstest;
use std::fs;

#[rstest]
fn require_existing_reports_missing_files() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");
    match require_existing(&path, ARG_PLACES).expect_err("file is missing") {
        CliError::MissingSourceFile {
            field,
            path: reported,
        } => {
            assert_eq!(field, ARG_PLACES);
            assert_eq!(reported, path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn require_existing_rejects_directories() {
    let workspace = Workspace::new();
    let dir = workspace.path("nested");
    fs::create_dir(dir.as_std_path()).expect("create directory");
    match require_existing(&dir, ARG_PLACES).expect_err("directory is not a file") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_PLACES),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn require_existing_accepts_files() {
    let workspace = Workspace::new();
    let path = workspace.write("places.json", b"[]");
    require_existing(&path, ARG_PLACES).expect("file exists");
}

#[rstest]
fn read_json_reports_unreadable_paths() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");
    match read_json::<Vec<u64>>(&path).expect_err("file is missing") {
        CliError::OpenInput { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn write_json_terminates_with_a_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &[1, 2]).expect("write JSON");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert!(text.ends_with("]\n"));
}

#[rstest]
#[case(true, "debug")]
#[case(false, "warn")]
fn verbosity_selects_the_default_filter(#[case] verbose: bool, #[case] expected: &str) {
    assert_eq!(default_directive(verbose), expected);
}
