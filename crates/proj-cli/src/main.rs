//! proj CLI
//!
//! Edits the managed regions of a CMake build file in place.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use commands::new::NewArgs;
use error::Result;
use proj_core::Action;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    if result.is_ok() && verbose {
        tracing::debug!("Verbose mode enabled");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.cmakelists.as_path();
    match cli.command {
        Some(Commands::Add { items, dry_run }) => {
            commands::run_edit(path, Action::Add, items, dry_run)
        }
        Some(Commands::Remove { items, dry_run }) => {
            commands::run_edit(path, Action::Remove, items, dry_run)
        }
        Some(Commands::New {
            kind,
            template,
            yes,
            items,
            dry_run,
        }) => commands::run_new(
            path,
            NewArgs {
                kind,
                template: &template,
                yes,
                items,
                dry_run,
            },
        ),
        Some(Commands::Show { json }) => commands::run_show(path, json),
        None => {
            println!("{} CMake region editor", "proj".green().bold());
            println!();
            println!("Run {} for available commands.", "proj --help".cyan());
            Ok(())
        }
    }
}
