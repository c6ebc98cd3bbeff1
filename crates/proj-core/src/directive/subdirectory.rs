use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::Directive;

static SUBDIRECTORY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*add_subdirectory\s*\(\s*([^\s()]+)\s*\)\s*$")
        .expect("Invalid subdirectory regex")
});

/// `add_subdirectory(<path>)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdirectory {
    pub path: String,
}

impl Subdirectory {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Directive for Subdirectory {
    const KIND: &'static str = "subdirectory";

    fn parse(line: &str) -> Option<Self> {
        let caps = SUBDIRECTORY_REGEX.captures(line)?;
        Some(Self::new(&caps[1]))
    }

    fn render(&self) -> String {
        format!("add_subdirectory({})", self.path)
    }

    fn same_entry(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let dir = Subdirectory::parse("  add_subdirectory( src/core )").unwrap();
        assert_eq!(dir.path, "src/core");
        assert_eq!(dir.render(), "add_subdirectory(src/core)");
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        assert!(Subdirectory::parse("add_subdirectory(src build)").is_none());
        assert!(Subdirectory::parse("add_subdirectory()").is_none());
    }
}
