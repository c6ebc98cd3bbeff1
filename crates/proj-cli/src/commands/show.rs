//! `proj show`

use std::path::Path;

use colored::Colorize;
use proj_core::inspect_file;

use crate::error::Result;

pub fn run_show(path: &Path, json: bool) -> Result<()> {
    let summary = inspect_file(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{} {}", "Type:".bold(), summary.project_type);
    if let Some(name) = &summary.project_name {
        println!("{} {}", "Project:".bold(), name);
    }
    if let Some(name) = &summary.target_name {
        println!("{} {}", "Target:".bold(), name);
    }
    for region in &summary.regions {
        println!();
        println!("{}", region.category.to_string().cyan().bold());
        if region.lines.is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
        for line in &region.lines {
            println!("  {}", line);
        }
    }
    Ok(())
}
