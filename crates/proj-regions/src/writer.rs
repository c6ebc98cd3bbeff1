//! Region generator: the exact inverse of [`crate::parser::parse`].

use crate::chunk::Chunk;

/// Creates the begin sentinel for a region.
pub fn begin_marker(name: &str) -> String {
    format!("# --== proj begin {} ==--", name)
}

/// Creates the end sentinel for a region.
pub fn end_marker(name: &str) -> String {
    format!("# --== proj end {} ==--", name)
}

/// Folds a chunk sequence back into text.
///
/// Siblings are joined with a single `\n`. A region emits its begin
/// sentinel, its children followed by one `\n` when it has any, then its
/// end sentinel. Sentinels are rebuilt from the template, never copied.
pub fn generate(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    write_chunks(chunks, &mut out);
    out
}

fn write_chunks(chunks: &[Chunk], out: &mut String) {
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match chunk {
            Chunk::Text(text) => out.push_str(text),
            Chunk::Region(region) => {
                out.push_str(&begin_marker(&region.name));
                out.push('\n');
                // Keyed on children, not on rendered text: a lone blank line
                // renders as "" yet still needs its separator.
                if !region.children.is_empty() {
                    write_chunks(&region.children, out);
                    out.push('\n');
                }
                out.push_str(&end_marker(&region.name));
            }
        }
    }
}
