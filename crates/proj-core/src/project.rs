//! Project model: type detection and name extraction.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use proj_regions::Document;

use crate::error::{Error, Result};
use crate::request::Category;

/// Region names consumed by the orchestrator.
pub mod regions {
    pub const PROJECT_NAME: &str = "project-name";
    pub const TYPE_ROOT_PROJECT: &str = "type-rootproject";
    pub const TYPE_EXECUTABLE: &str = "type-executable";
    pub const TYPE_LIBRARY: &str = "type-library";
    pub const EXECUTABLE_NAME: &str = "executable-name";
    pub const LIBRARY_NAME: &str = "library-name";
    pub const LIBRARY_EXPORTS: &str = "library-exports";
    pub const SOURCES: &str = "sources";
    pub const HEADERS: &str = "headers";
    pub const DEFINITIONS: &str = "definitions";
    pub const SUBDIRS: &str = "subdirs";
    pub const LINK_LIBRARIES: &str = "link-libraries";
}

static PROJECT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*project\s*\(\s*([^\s()]+)(?:\s+[^()]*)?\)\s*$")
        .expect("Invalid project name regex")
});

static EXECUTABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*set\s*\(\s*PROJ_EXECUTABLE_NAME\s+([^\s()]+)\s*\)\s*$")
        .expect("Invalid executable name regex")
});

static LIBRARY_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*set\s*\(\s*PROJ_LIBRARY_NAME\s+([^\s()]+)\s*\)\s*$")
        .expect("Invalid library name regex")
});

/// What kind of build file this is, declared by a marker region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Aggregates subdirectories; compiles nothing itself.
    RootProject,
    Executable,
    Library,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::RootProject,
        ProjectType::Executable,
        ProjectType::Library,
    ];

    pub fn marker_region(self) -> &'static str {
        match self {
            Self::RootProject => regions::TYPE_ROOT_PROJECT,
            Self::Executable => regions::TYPE_EXECUTABLE,
            Self::Library => regions::TYPE_LIBRARY,
        }
    }

    pub fn allows(self, category: Category) -> bool {
        match (self, category) {
            (_, Category::Subdirs) => true,
            (Self::RootProject, _) => false,
            (Self::Executable, Category::Exports) => false,
            _ => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RootProject => "rootproject",
            Self::Executable => "executable",
            Self::Library => "library",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the project type from its marker region.
///
/// # Errors
/// `MissingProjectType` if no marker exists, `ConflictingProjectType` if
/// more than one does.
pub fn detect_type(doc: &Document) -> Result<ProjectType> {
    let found: Vec<ProjectType> = ProjectType::ALL
        .into_iter()
        .filter(|ty| doc.contains_region(ty.marker_region()))
        .collect();

    match found.as_slice() {
        [ty] => Ok(*ty),
        [] => Err(Error::MissingProjectType {
            expected: ProjectType::ALL
                .iter()
                .map(|ty| ty.marker_region())
                .collect::<Vec<_>>()
                .join(", "),
        }),
        many => Err(Error::ConflictingProjectType {
            found: many
                .iter()
                .map(|ty| ty.marker_region())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

fn extract_name(doc: &Document, region: &str, template: &Regex) -> Result<String> {
    doc.region(region)?
        .text_lines()
        .into_iter()
        .find_map(|line| template.captures(line).map(|caps| caps[1].to_string()))
        .ok_or_else(|| Error::NameExtraction {
            region: region.to_string(),
        })
}

/// The name declared by `project(<name>)` in the project-name region.
pub fn project_name(doc: &Document) -> Result<String> {
    extract_name(doc, regions::PROJECT_NAME, &PROJECT_NAME_REGEX)
}

/// The canonical target name that directives are written against.
///
/// # Errors
/// `NameExtraction` if the name-declaring line does not match its template,
/// or if the project type builds no target at all.
pub fn target_name(doc: &Document, project_type: ProjectType) -> Result<String> {
    let (region, template) = match project_type {
        ProjectType::Executable => (regions::EXECUTABLE_NAME, &*EXECUTABLE_NAME_REGEX),
        ProjectType::Library => (regions::LIBRARY_NAME, &*LIBRARY_NAME_REGEX),
        ProjectType::RootProject => {
            return Err(Error::NameExtraction {
                region: project_type.marker_region().to_string(),
            });
        }
    };
    extract_name(doc, region, template)
}

/// Read-only overview of a build file's managed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project_type: ProjectType,
    pub project_name: Option<String>,
    pub target_name: Option<String>,
    pub regions: Vec<RegionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub category: Category,
    pub region: String,
    pub lines: Vec<String>,
}

/// Summarizes the project type, names, and the non-blank lines of every
/// category region present in the document.
pub fn summarize(doc: &Document) -> Result<ProjectSummary> {
    let project_type = detect_type(doc)?;

    let project_name = project_name(doc).ok();
    let target_name = target_name(doc, project_type).ok();

    let regions = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let region = doc.region(category.region_name()).ok()?;
            Some(RegionSummary {
                category,
                region: region.name.clone(),
                lines: region
                    .text_lines()
                    .into_iter()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            })
        })
        .collect();

    Ok(ProjectSummary {
        project_type,
        project_name,
        target_name,
        regions,
    })
}
