//! Maps a semantic request onto regions and mutation primitives.

use proj_regions::Document;
use serde::Serialize;

use crate::directive::Directive;
use crate::error::{Error, Result};
use crate::primitives::{self, Upsert};
use crate::project::{self, ProjectType};
use crate::request::{Action, Category, MutationRequest};

/// Per-category effect of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryChange {
    pub added: usize,
    pub replaced: usize,
    pub removed: usize,
}

impl CategoryChange {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.replaced == 0 && self.removed == 0
    }
}

/// What [`apply`] did to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub project_type: Option<ProjectType>,
    pub changes: Vec<(Category, CategoryChange)>,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        self.changes.iter().any(|(_, change)| !change.is_empty())
    }
}

/// Applies `request` to `doc` in memory.
///
/// An empty request returns immediately without inspecting the document.
/// Otherwise every check (project type, category guard, region lookup,
/// target name) runs before the first mutation, so an error leaves `doc`
/// as it was.
pub fn apply(doc: &mut Document, request: &MutationRequest) -> Result<Outcome> {
    if request.is_empty() {
        tracing::debug!("empty request; nothing to do");
        return Ok(Outcome::default());
    }
    request.validate()?;

    let project_type = project::detect_type(doc)?;
    tracing::debug!(%project_type, action = ?request.action, "applying request");

    for category in request.categories() {
        if !project_type.allows(category) {
            return Err(Error::UnsupportedCategory {
                category,
                project_type,
            });
        }
        doc.locate(category.region_name())?;
    }

    let target = if request.categories().any(Category::needs_target) {
        let name = project::target_name(doc, project_type)?;
        tracing::debug!(target_name = %name, "resolved target name");
        Some(name)
    } else {
        None
    };
    let target = target.as_deref().unwrap_or_default();

    let mut outcome = Outcome {
        project_type: Some(project_type),
        changes: Vec::new(),
    };
    for category in request.categories() {
        let region = doc.region_mut(category.region_name())?;
        let change = region.edit_entries(|entries| match category {
            Category::Sources => line_set(entries, request.action, &request.sources),
            Category::Headers => line_set(entries, request.action, &request.headers),
            Category::Exports => line_set(entries, request.action, &request.exports),
            Category::Subdirs => directives(entries, request.action, request.subdirectories()),
            Category::Definitions => directives(
                entries,
                request.action,
                request.definitions.iter().map(|item| item.for_target(target)),
            ),
            Category::LinkLibraries => directives(
                entries,
                request.action,
                request.link_libraries.iter().map(|item| item.for_target(target)),
            ),
        });
        tracing::debug!(%category, ?change, "category applied");
        outcome.changes.push((category, change));
    }

    Ok(outcome)
}

fn line_set(
    entries: &mut Vec<proj_regions::Entry>,
    action: Action,
    items: &[String],
) -> CategoryChange {
    match action {
        Action::Add => CategoryChange {
            added: primitives::add_lines(entries, items),
            ..CategoryChange::default()
        },
        Action::Remove => CategoryChange {
            removed: primitives::remove_lines(entries, items),
            ..CategoryChange::default()
        },
    }
}

fn directives<D: Directive>(
    entries: &mut Vec<proj_regions::Entry>,
    action: Action,
    items: impl Iterator<Item = D>,
) -> CategoryChange {
    let mut change = CategoryChange::default();
    for item in items {
        match action {
            Action::Add => match primitives::upsert_directive(entries, &item) {
                Upsert::Appended => change.added += 1,
                Upsert::Replaced => change.replaced += 1,
                Upsert::Unchanged => {}
            },
            Action::Remove => {
                if primitives::remove_directive(entries, &item) {
                    change.removed += 1;
                }
            }
        }
    }
    change
}
