//! Whole-file flows: read once, mutate, write once.

mod common;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use common::{EXECUTABLE, ROOT_PROJECT};
use pretty_assertions::assert_eq;
use proj_core::{
    ApplyOptions, AssumeYes, ConfirmOverwrite, Error, MutationRequest, ProjectType,
    apply_to_file, create_from_seed, inspect_file,
};
use tempfile::TempDir;

/// Records every prompt and answers with a fixed reply.
struct Scripted {
    answer: bool,
    asked: Vec<PathBuf>,
}

impl Scripted {
    fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl ConfirmOverwrite for Scripted {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        self.asked.push(path.to_path_buf());
        Ok(self.answer)
    }
}

struct Broken;

impl ConfirmOverwrite for Broken {
    fn confirm_overwrite(&mut self, _path: &Path) -> io::Result<bool> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

fn write_fixture(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("CMakeLists.txt");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_apply_to_file_writes_once() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, EXECUTABLE);

    let report = apply_to_file(
        &path,
        &MutationRequest::add().with_sources(["a.cpp", "b.cpp"]),
        ApplyOptions::default(),
    )
    .unwrap();

    assert!(report.written);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        EXECUTABLE.replace("a.cpp\n", "a.cpp\nb.cpp\n")
    );
}

#[test]
fn test_unchanged_result_is_not_written() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, EXECUTABLE);
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let report = apply_to_file(
        &path,
        &MutationRequest::add().with_sources(["a.cpp"]),
        ApplyOptions::default(),
    )
    .unwrap();

    assert!(!report.written);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn test_empty_request_does_not_read() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist.txt");

    let report = apply_to_file(&missing, &MutationRequest::add(), ApplyOptions::default()).unwrap();

    assert!(!report.written);
    assert!(!missing.exists());
}

#[test]
fn test_type_guard_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, ROOT_PROJECT);

    let err = apply_to_file(
        &path,
        &MutationRequest::add().with_headers(["x.h"]),
        ApplyOptions::default(),
    )
    .unwrap_err();

    assert!(err.is_invalid_project_type());
    assert_eq!(fs::read_to_string(&path).unwrap(), ROOT_PROJECT);
}

#[test]
fn test_structural_error_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let broken = EXECUTABLE.replace("# --== proj end sources ==--", "# --== proj end headers ==--");
    let path = write_fixture(&temp, &broken);

    let err = apply_to_file(
        &path,
        &MutationRequest::add().with_sources(["b.cpp"]),
        ApplyOptions::default(),
    )
    .unwrap_err();

    assert!(err.is_structural());
    assert_eq!(fs::read_to_string(&path).unwrap(), broken);
}

#[test]
fn test_dry_run_reports_diff() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, EXECUTABLE);

    let report = apply_to_file(
        &path,
        &MutationRequest::add().with_subdirs(["tests"]),
        ApplyOptions { dry_run: true },
    )
    .unwrap();

    assert!(!report.written);
    let diff = report.diff.unwrap();
    assert!(diff.contains("+add_subdirectory(tests)"));
    assert_eq!(fs::read_to_string(&path).unwrap(), EXECUTABLE);
}

#[test]
fn test_create_from_seed_new_path_does_not_ask() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app").join("CMakeLists.txt");
    let mut confirm = Scripted::answering(false);

    let report = create_from_seed(
        &path,
        EXECUTABLE,
        &MutationRequest::add().with_sources(["main.cpp"]),
        ApplyOptions::default(),
        &mut confirm,
    )
    .unwrap();

    assert!(report.written);
    assert!(confirm.asked.is_empty());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("a.cpp\nmain.cpp\n"));
}

#[test]
fn test_create_from_seed_with_empty_request_writes_seed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("CMakeLists.txt");

    create_from_seed(
        &path,
        ROOT_PROJECT,
        &MutationRequest::add(),
        ApplyOptions::default(),
        &mut AssumeYes,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), ROOT_PROJECT);
}

#[test]
fn test_create_from_seed_refused_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, "handwritten\n");
    let mut confirm = Scripted::answering(false);

    let err = create_from_seed(
        &path,
        EXECUTABLE,
        &MutationRequest::add(),
        ApplyOptions::default(),
        &mut confirm,
    )
    .unwrap_err();

    assert!(matches!(err, Error::OverwriteRefused { .. }));
    assert_eq!(confirm.asked, vec![path.clone()]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "handwritten\n");
}

#[test]
fn test_create_from_seed_accepted_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, "handwritten\n");
    let mut confirm = Scripted::answering(true);

    create_from_seed(
        &path,
        ROOT_PROJECT,
        &MutationRequest::add().with_subdirs(["app"]),
        ApplyOptions::default(),
        &mut confirm,
    )
    .unwrap();

    assert_eq!(confirm.asked.len(), 1);
    assert!(fs::read_to_string(&path).unwrap().contains("add_subdirectory(app)"));
}

#[test]
fn test_create_from_seed_refuses_directory() {
    let temp = TempDir::new().unwrap();

    let err = create_from_seed(
        temp.path(),
        ROOT_PROJECT,
        &MutationRequest::add(),
        ApplyOptions::default(),
        &mut AssumeYes,
    )
    .unwrap_err();

    assert!(matches!(err, Error::NotAFile { .. }));
}

#[test]
fn test_create_from_seed_prompt_failure() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, "handwritten\n");

    let err = create_from_seed(
        &path,
        ROOT_PROJECT,
        &MutationRequest::add(),
        ApplyOptions::default(),
        &mut Broken,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Confirm { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "handwritten\n");
}

#[test]
fn test_inspect_file() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, EXECUTABLE);

    let summary = inspect_file(&path).unwrap();
    assert_eq!(summary.project_type, ProjectType::Executable);
    assert_eq!(summary.project_name.as_deref(), Some("demo"));
    assert_eq!(summary.target_name.as_deref(), Some("demo_app"));

    let sources = summary
        .regions
        .iter()
        .find(|r| r.region == "sources")
        .unwrap();
    assert_eq!(sources.lines, vec!["a.cpp".to_string()]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["project_type"], "executable");
    assert_eq!(json["regions"][0]["category"], "sources");
}

#[test]
fn test_create_from_seed_prompts_for_non_utf8_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("CMakeLists.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let mut confirm = Scripted::answering(true);

    let report = create_from_seed(
        &path,
        ROOT_PROJECT,
        &MutationRequest::add(),
        ApplyOptions::default(),
        &mut confirm,
    )
    .unwrap();

    assert!(report.written);
    assert_eq!(confirm.asked, vec![path.clone()]);
    assert_eq!(fs::read_to_string(&path).unwrap(), ROOT_PROJECT);
}

#[test]
fn test_create_from_seed_dry_run_diffs_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = write_fixture(&temp, "handwritten\n");
    let mut confirm = Scripted::answering(false);

    let report = create_from_seed(
        &path,
        ROOT_PROJECT,
        &MutationRequest::add(),
        ApplyOptions { dry_run: true },
        &mut confirm,
    )
    .unwrap();

    let diff = report.diff.unwrap();
    assert!(diff.contains("-handwritten"));
    assert!(confirm.asked.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "handwritten\n");
}
