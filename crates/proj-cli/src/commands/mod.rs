//! Command implementations for proj-cli

pub mod edit;
pub mod new;
pub mod show;

pub use edit::run_edit;
pub use new::run_new;
pub use show::run_show;

use colored::Colorize;
use proj_core::{Action, FileReport, MutationRequest};

use crate::cli::ItemArgs;
use crate::error::Result;

/// Turns the flag groups into a typed request.
pub fn build_request(action: Action, items: ItemArgs) -> Result<MutationRequest> {
    let base = match action {
        Action::Add => MutationRequest::add(),
        Action::Remove => MutationRequest::remove(),
    };
    let request = base
        .with_sources(items.sources)
        .with_headers(items.headers)
        .with_exports(items.exports)
        .with_subdirs(items.subdirs)
        .with_definitions(&items.definitions)?
        .with_link_libraries(&items.link_libraries)?;
    request.validate()?;
    Ok(request)
}

/// Prints what a flow did, or the diff it would apply.
pub fn print_report(report: &FileReport) {
    if let Some(diff) = &report.diff {
        if diff.is_empty() {
            println!("{} No changes", "=".dimmed());
        } else {
            print!("{}", diff);
        }
        return;
    }

    for (category, change) in &report.outcome.changes {
        if change.is_empty() {
            continue;
        }
        let mut parts = Vec::new();
        if change.added > 0 {
            parts.push(format!("{} added", change.added).green().to_string());
        }
        if change.replaced > 0 {
            parts.push(format!("{} replaced", change.replaced).yellow().to_string());
        }
        if change.removed > 0 {
            parts.push(format!("{} removed", change.removed).red().to_string());
        }
        println!("  {}: {}", category.to_string().bold(), parts.join(", "));
    }

    if report.written {
        println!("{} Updated {}", "OK".green().bold(), report.path.display());
    } else {
        println!("{} {} is up to date", "=".dimmed(), report.path.display());
    }
}
