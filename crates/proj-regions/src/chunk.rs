//! The chunk tree produced by the parser.

use crate::lines::{self, Entry};

/// One node of the chunk tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A run of consecutive plain lines, rejoined with `\n`.
    Text(String),
    /// A named region and everything between its sentinels.
    Region(Region),
}

impl Chunk {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_region(&self) -> Option<&Region> {
        match self {
            Self::Region(region) => Some(region),
            Self::Text(_) => None,
        }
    }
}

/// A named region delimited by a begin/end sentinel pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub children: Vec<Chunk>,
}

impl Region {
    pub fn new(name: impl Into<String>, children: Vec<Chunk>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Plain lines directly inside this region, skipping nested regions.
    pub fn text_lines(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|chunk| match chunk {
                Chunk::Text(text) => Some(text.split('\n')),
                Chunk::Region(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Line-level view of the children. Nested regions appear as single entries.
    pub fn entries(&self) -> Vec<Entry> {
        lines::to_entries(self.children.clone())
    }

    /// Run `edit` against the line-level view and fold the result back into
    /// chunks. Lines the closure leaves alone keep their exact text.
    pub fn edit_entries<R>(&mut self, edit: impl FnOnce(&mut Vec<Entry>) -> R) -> R {
        let mut entries = lines::to_entries(std::mem::take(&mut self.children));
        let result = edit(&mut entries);
        self.children = lines::from_entries(entries);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines_skip_nested_regions() {
        let region = Region::new(
            "outer",
            vec![
                Chunk::text("a\nb"),
                Chunk::Region(Region::new("inner", vec![Chunk::text("hidden")])),
                Chunk::text("c"),
            ],
        );
        assert_eq!(region.text_lines(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_edit_entries_untouched_is_identity() {
        let mut region = Region::new(
            "outer",
            vec![
                Chunk::text("  a  \n"),
                Chunk::Region(Region::new("inner", vec![])),
            ],
        );
        let before = region.clone();
        region.edit_entries(|_| ());
        assert_eq!(region, before);
    }
}
