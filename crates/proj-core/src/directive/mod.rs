//! Recognition and canonical rendering of single-line build directives.
//!
//! Each directive kind has its own small parser that turns a line into a
//! structured record. Records are compared by logical identity, so lines
//! that differ only in spacing or in a definition's value are the same
//! entry. Nothing here touches the region tree; see [`crate::primitives`].

mod definition;
mod link_library;
mod subdirectory;

pub use definition::{CompileDefinition, Visibility};
pub use link_library::{LinkLibrary, LinkQualifier};
pub use subdirectory::Subdirectory;

/// A structured single-line directive.
pub trait Directive: Sized {
    /// Short label used in logs.
    const KIND: &'static str;

    /// Parses a line, returning `None` if it is not this kind of directive.
    fn parse(line: &str) -> Option<Self>;

    /// Renders the canonical line for this directive.
    fn render(&self) -> String;

    /// Whether `other` names the same logical entry, ignoring payload
    /// details such as a definition's value.
    fn same_entry(&self, other: &Self) -> bool;
}
