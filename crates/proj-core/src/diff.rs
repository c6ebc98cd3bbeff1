//! Unified diffs for dry runs.

use similar::TextDiff;

/// Renders a unified diff from `old` to `new` with three lines of context.
///
/// Returns an empty string when the texts are equal.
pub fn unified_diff(old: &str, new: &str, label: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}
