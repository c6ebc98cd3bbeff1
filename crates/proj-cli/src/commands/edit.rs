//! `proj add` / `proj remove`

use std::path::Path;

use colored::Colorize;
use proj_core::{Action, ApplyOptions, apply_to_file};

use super::{build_request, print_report};
use crate::cli::ItemArgs;
use crate::error::Result;

pub fn run_edit(path: &Path, action: Action, items: ItemArgs, dry_run: bool) -> Result<()> {
    let request = build_request(action, items)?;
    if request.is_empty() {
        println!("{} Nothing to do", "=".dimmed());
        return Ok(());
    }

    let report = apply_to_file(path, &request, ApplyOptions { dry_run })?;
    print_report(&report);
    Ok(())
}
