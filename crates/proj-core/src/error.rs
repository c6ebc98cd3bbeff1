//! Error types for proj-core

use std::path::PathBuf;

use crate::project::ProjectType;
use crate::request::Category;

/// Result type for proj-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mutating a build file.
///
/// Every variant is raised before the single write, so a failed command
/// leaves the file untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed sentinels or a missing region
    #[error(transparent)]
    Region(#[from] proj_regions::Error),

    /// Filesystem error from proj-fs
    #[error(transparent)]
    Fs(#[from] proj_fs::Error),

    /// The name-declaring line does not match its template
    #[error("Corrupted or missing name in region '{region}'")]
    NameExtraction { region: String },

    #[error("No project type region found (expected one of: {expected})")]
    MissingProjectType { expected: String },

    #[error("Conflicting project type regions: {found}")]
    ConflictingProjectType { found: String },

    #[error("Cannot change {category} in a {project_type} project")]
    UnsupportedCategory {
        category: Category,
        project_type: ProjectType,
    },

    #[error("Invalid {category} item '{item}': {reason}")]
    InvalidItem {
        category: Category,
        item: String,
        reason: String,
    },

    #[error("{path} already exists and is not a file")]
    NotAFile { path: PathBuf },

    #[error("Will not overwrite {path}")]
    OverwriteRefused { path: PathBuf },

    #[error("Overwrite confirmation failed for {path}: {source}")]
    Confirm {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_item(
        category: Category,
        item: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidItem {
            category,
            item: item.into(),
            reason: reason.into(),
        }
    }

    /// Mismatched or unterminated region markers.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Region(e) if e.is_structural())
    }

    /// A required region is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Region(proj_regions::Error::RegionNotFound { .. }))
    }

    /// No usable project type, or the request is not allowed for it.
    pub fn is_invalid_project_type(&self) -> bool {
        matches!(
            self,
            Self::MissingProjectType { .. }
                | Self::ConflictingProjectType { .. }
                | Self::UnsupportedCategory { .. }
        )
    }
}
