//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// proj - Keep the managed regions of a CMakeLists.txt in shape
#[derive(Parser, Debug)]
#[command(name = "proj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Build file to operate on
    #[arg(
        long,
        global = true,
        env = "PROJ_CMAKELISTS",
        default_value = "CMakeLists.txt",
        value_name = "FILE"
    )]
    pub cmakelists: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add items to managed regions
    ///
    /// Items already present are left alone. A definition whose value
    /// changed is rewritten in place.
    ///
    /// Examples:
    ///   proj add --sources main.cpp util.cpp
    ///   proj add --definitions VERBOSE PUBLIC:LEVEL=3
    ///   proj add --link-libraries pthread debug:zlibd
    Add {
        #[command(flatten)]
        items: ItemArgs,

        /// Print a diff instead of writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove items from managed regions
    Remove {
        #[command(flatten)]
        items: ItemArgs,

        /// Print a diff instead of writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Create a build file from a seed template
    ///
    /// Examples:
    ///   proj new executable --template seeds/exe.txt --sources main.cpp
    ///   proj new rootproject --template seeds/root.txt --subdirs app lib
    New {
        /// Project type the template must declare
        #[arg(value_enum)]
        kind: ProjectKind,

        /// Seed template to start from
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        items: ItemArgs,

        /// Print a diff instead of writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the project type, names, and managed items
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Rootproject,
    Executable,
    Library,
}

/// Item groups, each taking one or more values.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemArgs {
    /// Source files
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub sources: Vec<String>,

    /// Header files
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub headers: Vec<String>,

    /// Exported headers (libraries only)
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub exports: Vec<String>,

    /// Compile definitions as [VISIBILITY:]SYMBOL[=VALUE]
    #[arg(long, num_args = 1.., value_name = "DEF")]
    pub definitions: Vec<String>,

    /// Subdirectories to include
    #[arg(long, num_args = 1.., value_name = "DIR")]
    pub subdirs: Vec<String>,

    /// Link libraries as [debug|optimized|general:]LIBRARY
    #[arg(long, num_args = 1.., value_name = "LIB")]
    pub link_libraries: Vec<String>,
}
