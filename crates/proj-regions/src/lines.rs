//! Line-level view of a region's children.
//!
//! Sibling chunks are always joined by exactly one `\n`, so splitting every
//! text chunk on `\n` gives a flat line list whose rejoined form is the same
//! text. Mutation primitives work on this list and never see sentinels.

use crate::chunk::{Chunk, Region};

/// A single line, or a nested region carried through as one opaque entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Line(String),
    Region(Region),
}

impl Entry {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn as_line(&self) -> Option<&str> {
        match self {
            Self::Line(line) => Some(line),
            Self::Region(_) => None,
        }
    }
}

pub fn to_entries(children: Vec<Chunk>) -> Vec<Entry> {
    let mut entries = Vec::new();
    for chunk in children {
        match chunk {
            Chunk::Text(text) => entries.extend(text.split('\n').map(Entry::line)),
            Chunk::Region(region) => entries.push(Entry::Region(region)),
        }
    }
    entries
}

/// Inverse of [`to_entries`]: consecutive lines collapse into one text chunk.
pub fn from_entries(entries: Vec<Entry>) -> Vec<Chunk> {
    let mut children = Vec::new();
    let mut run: Vec<String> = Vec::new();
    for entry in entries {
        match entry {
            Entry::Line(line) => run.push(line),
            Entry::Region(region) => {
                if !run.is_empty() {
                    children.push(Chunk::Text(run.join("\n")));
                    run.clear();
                }
                children.push(Chunk::Region(region));
            }
        }
    }
    if !run.is_empty() {
        children.push(Chunk::Text(run.join("\n")));
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_text_chunk_is_one_blank_line() {
        let entries = to_entries(vec![Chunk::text("")]);
        assert_eq!(entries, vec![Entry::line("")]);
        assert_eq!(from_entries(entries), vec![Chunk::text("")]);
    }

    #[test]
    fn test_no_children_is_no_entries() {
        assert!(to_entries(Vec::new()).is_empty());
        assert!(from_entries(Vec::new()).is_empty());
    }

    #[test]
    fn test_regions_split_runs() {
        let children = vec![
            Chunk::text("a\nb"),
            Chunk::Region(Region::new("r", vec![Chunk::text("x")])),
            Chunk::text("c\n"),
        ];
        let entries = to_entries(children.clone());
        assert_eq!(entries.len(), 5);
        assert_eq!(from_entries(entries), children);
    }
}
