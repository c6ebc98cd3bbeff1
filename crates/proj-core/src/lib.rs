//! Directive-aware editing of managed build-file regions.
//!
//! Builds on [`proj_regions`] to turn semantic requests ("add these
//! sources", "define `X=2` privately") into idempotent edits of the right
//! regions, leaving everything else in the file byte-for-byte unchanged.
//!
//! ```
//! use proj_core::{MutationRequest, orchestrator};
//! use proj_regions::Document;
//!
//! let text = [
//!     "# --== proj begin type-executable ==--",
//!     "# --== proj end type-executable ==--",
//!     "# --== proj begin sources ==--",
//!     "a.cpp",
//!     "# --== proj end sources ==--",
//! ]
//! .join("\n");
//! let mut doc = Document::parse(&text).unwrap();
//! let request = MutationRequest::add().with_sources(["a.cpp", "b.cpp"]);
//! orchestrator::apply(&mut doc, &request).unwrap();
//! assert_eq!(doc.region("sources").unwrap().text_lines(), vec!["a.cpp", "b.cpp"]);
//! ```

pub mod diff;
pub mod directive;
pub mod error;
pub mod file;
pub mod orchestrator;
pub mod primitives;
pub mod project;
pub mod request;

pub use directive::{
    CompileDefinition, Directive, LinkLibrary, LinkQualifier, Subdirectory, Visibility,
};
pub use error::{Error, Result};
pub use file::{
    ApplyOptions, AssumeYes, ConfirmOverwrite, FileReport, apply_to_file, create_from_seed,
    inspect_file,
};
pub use orchestrator::{CategoryChange, Outcome, apply};
pub use project::{ProjectSummary, ProjectType, RegionSummary, detect_type, summarize};
pub use request::{Action, Category, DefinitionItem, LinkItem, MutationRequest};
