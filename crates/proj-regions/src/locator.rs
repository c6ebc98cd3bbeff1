//! Depth-first region lookup.
//!
//! The tree has a single owner, so lookups hand back a [`RegionPath`] of
//! child indices rather than a reference; the owner resolves it when it is
//! ready to read or mutate.

use crate::chunk::{Chunk, Region};

/// Index path from the top-level chunk list down to a region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionPath {
    indices: Vec<usize>,
}

impl RegionPath {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Nesting depth, where a top-level region has depth 1.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    pub fn resolve<'a>(&self, chunks: &'a [Chunk]) -> Option<&'a Region> {
        let (first, rest) = self.indices.split_first()?;
        let mut region = chunks.get(*first)?.as_region()?;
        for &i in rest {
            region = region.children.get(i)?.as_region()?;
        }
        Some(region)
    }

    pub fn resolve_mut<'a>(&self, chunks: &'a mut [Chunk]) -> Option<&'a mut Region> {
        let (first, rest) = self.indices.split_first()?;
        let mut region = match chunks.get_mut(*first)? {
            Chunk::Region(region) => region,
            Chunk::Text(_) => return None,
        };
        for &i in rest {
            region = match region.children.get_mut(i)? {
                Chunk::Region(region) => region,
                Chunk::Text(_) => return None,
            };
        }
        Some(region)
    }
}

/// Finds the first region named `name` in document order.
///
/// A region is checked before its children, and its children before its
/// next sibling. Later regions with the same name are unreachable.
pub fn locate(chunks: &[Chunk], name: &str) -> Option<RegionPath> {
    let mut indices = Vec::new();
    search(chunks, name, &mut indices).then_some(RegionPath { indices })
}

fn search(chunks: &[Chunk], name: &str, indices: &mut Vec<usize>) -> bool {
    for (i, chunk) in chunks.iter().enumerate() {
        if let Chunk::Region(region) = chunk {
            indices.push(i);
            if region.name == name || search(&region.children, name, indices) {
                return true;
            }
            indices.pop();
        }
    }
    false
}
