//! Recursive-descent region parser.
//!
//! Parses sentinel-delimited regions of the form:
//! ```text
//! # --== proj begin NAME ==--
//! content here
//! # --== proj end NAME ==--
//! ```
//!
//! Only whitespace may follow the closing `==--`. A marker line carrying
//! trailing text (`# --== proj begin x ==-- note`) is a plain line.

use regex::Regex;
use std::sync::LazyLock;

use crate::chunk::{Chunk, Region};
use crate::error::{Error, Result};

/// Regex for matching begin sentinels. The name is captured greedily and
/// validated separately so that malformed names are reported, not skipped.
static BEGIN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*# --== proj begin (.+) ==--\s*$").expect("Invalid begin marker regex")
});

/// Regex for matching end sentinels.
static END_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*# --== proj end (.+) ==--\s*$").expect("Invalid end marker regex")
});

/// Whether `line` would be read as a begin or end sentinel.
///
/// Text written into a region must never satisfy this, or the next parse
/// would see a marker where a plain line was meant.
pub fn is_sentinel(line: &str) -> bool {
    BEGIN_MARKER_REGEX.is_match(line) || END_MARKER_REGEX.is_match(line)
}

#[derive(Debug, PartialEq, Eq)]
enum Sentinel<'a> {
    Begin(&'a str),
    End(&'a str),
}

impl<'a> Sentinel<'a> {
    fn recognize(line: &'a str, line_no: usize) -> Result<Option<Self>> {
        let sentinel = if let Some(caps) = BEGIN_MARKER_REGEX.captures(line) {
            caps.get(1).map(|m| Sentinel::Begin(m.as_str()))
        } else if let Some(caps) = END_MARKER_REGEX.captures(line) {
            caps.get(1).map(|m| Sentinel::End(m.as_str()))
        } else {
            None
        };

        if let Some(Sentinel::Begin(name) | Sentinel::End(name)) = &sentinel {
            if name.chars().any(char::is_whitespace) {
                return Err(Error::InvalidRegionName {
                    name: name.to_string(),
                    line: line_no,
                });
            }
        }
        Ok(sentinel)
    }
}

/// Parses text into a top-level chunk sequence.
///
/// Runs of plain lines become one [`Chunk::Text`] each; regions nest without
/// a depth limit. Empty input yields a single empty text chunk.
///
/// # Errors
/// Fails if an end sentinel does not name the innermost open region, or if
/// input ends while a region is still open.
///
/// # Example
/// ```
/// use proj_regions::{Chunk, parse};
///
/// let chunks = parse("a\n# --== proj begin b ==--\nc\n# --== proj end b ==--").unwrap();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0], Chunk::text("a"));
/// ```
pub fn parse(text: &str) -> Result<Vec<Chunk>> {
    let mut lines = text.split('\n').enumerate();
    parse_level(&mut lines, None)
}

fn parse_level<'a, I>(lines: &mut I, open: Option<&str>) -> Result<Vec<Chunk>>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut chunks = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    while let Some((index, line)) = lines.next() {
        match Sentinel::recognize(line, index + 1)? {
            None => run.push(line),
            Some(Sentinel::Begin(name)) => {
                flush_run(&mut run, &mut chunks);
                tracing::trace!(region = name, line = index + 1, "entering region");
                let children = parse_level(lines, Some(name))?;
                chunks.push(Chunk::Region(Region::new(name, children)));
            }
            Some(Sentinel::End(name)) => {
                flush_run(&mut run, &mut chunks);
                if open != Some(name) {
                    return Err(Error::UnexpectedCloseMarker {
                        found: name.to_string(),
                        expected: open.map(str::to_string),
                        line: index + 1,
                    });
                }
                return Ok(chunks);
            }
        }
    }

    if let Some(name) = open {
        return Err(Error::MissingCloseMarker {
            expected: name.to_string(),
        });
    }

    flush_run(&mut run, &mut chunks);
    Ok(chunks)
}

fn flush_run(run: &mut Vec<&str>, chunks: &mut Vec<Chunk>) {
    if !run.is_empty() {
        chunks.push(Chunk::Text(run.join("\n")));
        run.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_plain_line() {
        assert_eq!(Sentinel::recognize("add_executable(x)", 1).unwrap(), None);
    }

    #[test]
    fn test_recognize_tolerates_incidental_whitespace() {
        assert_eq!(
            Sentinel::recognize("  # --== proj begin sources ==--  \r", 1).unwrap(),
            Some(Sentinel::Begin("sources"))
        );
        assert_eq!(
            Sentinel::recognize("# --== proj end sources ==--", 1).unwrap(),
            Some(Sentinel::End("sources"))
        );
    }

    #[test]
    fn test_recognize_rejects_name_with_whitespace() {
        let err = Sentinel::recognize("# --== proj begin my sources ==--", 7).unwrap_err();
        assert!(matches!(err, Error::InvalidRegionName { line: 7, .. }));
    }

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel("# --== proj begin sources ==--"));
        assert!(is_sentinel("  # --== proj end my sources ==--\r"));
        assert!(!is_sentinel("# --== proj begin sources ==-- note"));
        assert!(!is_sentinel("main.cpp"));
    }

    #[test]
    fn test_trailing_text_makes_plain_line() {
        let text = "# --== proj begin x ==-- note\nbody\n# --== proj end x ==-- note";
        assert_eq!(parse(text).unwrap(), vec![Chunk::text(text)]);
    }

    #[test]
    fn test_empty_region() {
        let chunks = parse("# --== proj begin a ==--\n# --== proj end a ==--").unwrap();
        assert_eq!(chunks, vec![Chunk::Region(Region::new("a", vec![]))]);
    }
}
