//! A parsed build file owned by one caller for one command.

use std::collections::HashSet;

use crate::chunk::{Chunk, Region};
use crate::error::{Error, Result};
use crate::locator::{RegionPath, locate};
use crate::{parser, writer};

/// Owned chunk tree for a whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    chunks: Vec<Chunk>,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self> {
        let chunks = parser::parse(text)?;
        let doc = Self { chunks };

        let mut seen = HashSet::new();
        for name in doc.region_names() {
            if !seen.insert(name) {
                tracing::warn!(region = name, "duplicate region name; only the first is reachable");
            }
        }

        tracing::debug!(chunks = doc.chunks.len(), "parsed document");
        Ok(doc)
    }

    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }

    pub fn generate(&self) -> String {
        writer::generate(&self.chunks)
    }

    /// Finds the first region named `name`.
    ///
    /// # Errors
    /// Returns `Error::RegionNotFound` if no region has that name.
    pub fn locate(&self, name: &str) -> Result<RegionPath> {
        locate(&self.chunks, name).ok_or_else(|| Error::RegionNotFound {
            name: name.to_string(),
        })
    }

    pub fn contains_region(&self, name: &str) -> bool {
        locate(&self.chunks, name).is_some()
    }

    pub fn region(&self, name: &str) -> Result<&Region> {
        let path = self.locate(name)?;
        path.resolve(&self.chunks).ok_or_else(|| Error::RegionNotFound {
            name: name.to_string(),
        })
    }

    pub fn region_mut(&mut self, name: &str) -> Result<&mut Region> {
        let path = self.locate(name)?;
        path.resolve_mut(&mut self.chunks)
            .ok_or_else(|| Error::RegionNotFound {
                name: name.to_string(),
            })
    }

    /// All region names in document order, duplicates included.
    pub fn region_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_names(&self.chunks, &mut names);
        names
    }
}

fn collect_names<'a>(chunks: &'a [Chunk], names: &mut Vec<&'a str>) {
    for chunk in chunks {
        if let Chunk::Region(region) = chunk {
            names.push(region.name.as_str());
            collect_names(&region.children, names);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "\
# --== proj begin a ==--
# --== proj begin b ==--
x
# --== proj end b ==--
# --== proj end a ==--
# --== proj begin b ==--
y
# --== proj end b ==--
";

    #[test]
    fn test_region_names_in_document_order() {
        let doc = Document::parse(TEXT).unwrap();
        assert_eq!(doc.region_names(), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let doc = Document::parse(TEXT).unwrap();
        assert_eq!(doc.region("b").unwrap().text_lines(), vec!["x"]);
    }

    #[test]
    fn test_region_not_found() {
        let doc = Document::parse(TEXT).unwrap();
        let err = doc.region("sources").unwrap_err();
        assert!(matches!(err, Error::RegionNotFound { ref name } if name == "sources"));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_region_mut_then_generate() {
        let mut doc = Document::parse(TEXT).unwrap();
        doc.region_mut("b").unwrap().children = vec![Chunk::text("z")];
        assert!(doc.generate().contains("# --== proj begin b ==--\nz\n# --== proj end b ==--"));
    }
}
