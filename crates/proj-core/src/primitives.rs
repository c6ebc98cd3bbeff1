//! Idempotent mutation primitives over a region's line list.
//!
//! Every function works on the [`Entry`] view of one region. Nested regions
//! pass through untouched and keep their position; plain lines that are not
//! the subject of a mutation keep their exact original text.

use std::collections::HashSet;

use proj_regions::Entry;

use crate::directive::Directive;

/// What an upsert did to the line list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A matching line already had the canonical text.
    Unchanged,
    /// A matching line was rewritten in place.
    Replaced,
    /// No matching line existed; one was appended.
    Appended,
}

fn trimmed_lines(entries: &[Entry]) -> HashSet<&str> {
    entries
        .iter()
        .filter_map(Entry::as_line)
        .map(str::trim)
        .collect()
}

/// Appends each item not already present, comparing trimmed text.
///
/// Items are appended trimmed and in request order. Existing lines are
/// never rewritten. Returns the number of lines appended.
pub fn add_lines<S: AsRef<str>>(entries: &mut Vec<Entry>, items: &[S]) -> usize {
    let mut present: HashSet<String> = trimmed_lines(entries)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut added = 0;
    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() || present.contains(item) {
            continue;
        }
        present.insert(item.to_string());
        entries.push(Entry::line(item));
        added += 1;
    }
    added
}

/// Drops every plain line whose trimmed text is one of `items`.
///
/// Survivors keep their order and text. Returns the number of lines removed.
pub fn remove_lines<S: AsRef<str>>(entries: &mut Vec<Entry>, items: &[S]) -> usize {
    let doomed: HashSet<&str> = items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect();

    let before = entries.len();
    entries.retain(|entry| match entry {
        Entry::Line(line) => !doomed.contains(line.trim()),
        Entry::Region(_) => true,
    });
    before - entries.len()
}

fn matches<D: Directive>(entry: &Entry, item: &D) -> bool {
    entry
        .as_line()
        .and_then(D::parse)
        .is_some_and(|existing| existing.same_entry(item))
}

/// Adds or updates a directive by logical identity.
///
/// The first line naming the same entry is replaced in place with the
/// canonical rendering; later lines naming it are dropped so the entry
/// collapses to one. With no match, the canonical line is appended.
pub fn upsert_directive<D: Directive>(entries: &mut Vec<Entry>, item: &D) -> Upsert {
    let rendered = item.render();

    let Some(first) = entries.iter().position(|entry| matches(entry, item)) else {
        tracing::debug!(kind = D::KIND, line = %rendered, "appending directive");
        entries.push(Entry::line(rendered));
        return Upsert::Appended;
    };

    let mut rewritten = entries[first].as_line() != Some(rendered.as_str());

    let mut index = first + 1;
    while index < entries.len() {
        if matches(&entries[index], item) {
            entries.remove(index);
            rewritten = true;
        } else {
            index += 1;
        }
    }

    if rewritten {
        tracing::debug!(kind = D::KIND, line = %rendered, position = first, "replacing directive");
        entries[first] = Entry::line(rendered);
        Upsert::Replaced
    } else {
        Upsert::Unchanged
    }
}

/// Deletes the first line naming the same entry as `item`.
///
/// Returns whether a line was removed.
pub fn remove_directive<D: Directive>(entries: &mut Vec<Entry>, item: &D) -> bool {
    match entries.iter().position(|entry| matches(entry, item)) {
        Some(index) => {
            tracing::debug!(kind = D::KIND, position = index, "removing directive");
            entries.remove(index);
            true
        }
        None => false,
    }
}
