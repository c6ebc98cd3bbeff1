//! Whole-file flows: one read, one in-memory mutation, at most one write.

use std::path::{Path, PathBuf};

use proj_fs::PathState;
use proj_regions::Document;

use crate::diff::unified_diff;
use crate::error::{Error, Result};
use crate::orchestrator::{self, Outcome};
use crate::project::{self, ProjectSummary};
use crate::request::MutationRequest;

/// Asks whether an existing file may be replaced.
///
/// The call blocks until an answer is available; the write waits on it.
pub trait ConfirmOverwrite {
    fn confirm_overwrite(&mut self, path: &Path) -> std::io::Result<bool>;
}

/// Answers yes without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ConfirmOverwrite for AssumeYes {
    fn confirm_overwrite(&mut self, _path: &Path) -> std::io::Result<bool> {
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Compute the result and a diff, but write nothing.
    pub dry_run: bool,
}

/// Result of a whole-file flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub written: bool,
    /// Unified diff of the change, filled in for dry runs.
    pub diff: Option<String>,
}

fn label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Applies `request` to the build file at `path`.
///
/// An empty request touches nothing, not even the file. The file is only
/// rewritten when the request changed it.
pub fn apply_to_file(
    path: &Path,
    request: &MutationRequest,
    options: ApplyOptions,
) -> Result<FileReport> {
    let mut report = FileReport {
        path: path.to_path_buf(),
        outcome: Outcome::default(),
        written: false,
        diff: None,
    };
    if request.is_empty() {
        tracing::debug!(path = %path.display(), "empty request; file not read");
        return Ok(report);
    }
    request.validate()?;

    let original = proj_fs::read_text(path)?;
    let mut doc = Document::parse(&original)?;
    report.outcome = orchestrator::apply(&mut doc, request)?;

    if !report.outcome.changed() {
        tracing::debug!(path = %path.display(), "no changes");
        return Ok(report);
    }

    let updated = doc.generate();
    if options.dry_run {
        report.diff = Some(unified_diff(&original, &updated, &label(path)));
    } else {
        proj_fs::write_text(path, &updated)?;
        report.written = true;
        tracing::info!(path = %path.display(), "updated build file");
    }
    Ok(report)
}

/// Creates a build file from caller-supplied seed text, then applies
/// `request` to it before the single write.
///
/// A pre-existing regular file is only replaced if `confirm` agrees;
/// anything else already at `path` is refused outright.
pub fn create_from_seed(
    path: &Path,
    seed: &str,
    request: &MutationRequest,
    options: ApplyOptions,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<FileReport> {
    request.validate()?;

    let exists = match proj_fs::probe(path) {
        PathState::Other => {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
        PathState::File => true,
        PathState::Missing => false,
    };

    let mut doc = Document::parse(seed)?;
    let outcome = orchestrator::apply(&mut doc, request)?;
    let generated = doc.generate();

    let mut report = FileReport {
        path: path.to_path_buf(),
        outcome,
        written: false,
        diff: None,
    };

    if options.dry_run {
        // Only a dry run needs the old text
        let old = if exists {
            proj_fs::read_text(path)?
        } else {
            String::new()
        };
        report.diff = Some(unified_diff(&old, &generated, &label(path)));
        return Ok(report);
    }

    if exists {
        let accepted = confirm
            .confirm_overwrite(path)
            .map_err(|source| Error::Confirm {
                path: path.to_path_buf(),
                source,
            })?;
        if !accepted {
            return Err(Error::OverwriteRefused {
                path: path.to_path_buf(),
            });
        }
    }

    proj_fs::write_text(path, &generated)?;
    report.written = true;
    tracing::info!(path = %path.display(), "created build file");
    Ok(report)
}

/// Reads the build file at `path` and summarizes its managed state.
pub fn inspect_file(path: &Path) -> Result<ProjectSummary> {
    let text = proj_fs::read_text(path)?;
    let doc = Document::parse(&text)?;
    project::summarize(&doc)
}
