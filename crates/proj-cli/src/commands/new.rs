//! `proj new`

use std::path::Path;

use proj_core::{Action, ApplyOptions, AssumeYes, ConfirmOverwrite, ProjectType, create_from_seed};
use proj_regions::Document;

use super::{build_request, print_report};
use crate::cli::{ItemArgs, ProjectKind};
use crate::error::{CliError, Result};
use crate::interactive::TerminalConfirm;

impl From<ProjectKind> for ProjectType {
    fn from(kind: ProjectKind) -> Self {
        match kind {
            ProjectKind::Rootproject => ProjectType::RootProject,
            ProjectKind::Executable => ProjectType::Executable,
            ProjectKind::Library => ProjectType::Library,
        }
    }
}

pub struct NewArgs<'a> {
    pub kind: ProjectKind,
    pub template: &'a Path,
    pub yes: bool,
    pub items: ItemArgs,
    pub dry_run: bool,
}

pub fn run_new(path: &Path, args: NewArgs<'_>) -> Result<()> {
    let seed = proj_fs::read_text(args.template)?;

    let expected = ProjectType::from(args.kind);
    let declared = proj_core::detect_type(&Document::parse(&seed)?)?;
    if declared != expected {
        return Err(CliError::user(format!(
            "template {} declares a {} project, not {}",
            args.template.display(),
            declared,
            expected
        )));
    }

    let request = build_request(Action::Add, args.items)?;
    let mut confirm: Box<dyn ConfirmOverwrite> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    };

    let report = create_from_seed(
        path,
        &seed,
        &request,
        ApplyOptions {
            dry_run: args.dry_run,
        },
        confirm.as_mut(),
    )?;
    print_report(&report);
    Ok(())
}
