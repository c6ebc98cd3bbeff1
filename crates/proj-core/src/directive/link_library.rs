use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::Directive;

static LINK_LIBRARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*target_link_libraries\s*\(\s*(\S+)\s+(debug|optimized|general)\s+([^\s()]+)\s*\)\s*$",
    )
    .expect("Invalid link library regex")
});

/// Build-configuration keyword of a link library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkQualifier {
    Debug,
    Optimized,
    General,
}

impl LinkQualifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Optimized => "optimized",
            Self::General => "general",
        }
    }
}

impl fmt::Display for LinkQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkQualifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "optimized" => Ok(Self::Optimized),
            "general" => Ok(Self::General),
            _ => Err(format!("unknown link qualifier '{}'", s)),
        }
    }
}

/// `target_link_libraries(<target> <qualifier> <library>)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkLibrary {
    pub target: String,
    pub qualifier: LinkQualifier,
    pub library: String,
}

impl Directive for LinkLibrary {
    const KIND: &'static str = "link-library";

    fn parse(line: &str) -> Option<Self> {
        let caps = LINK_LIBRARY_REGEX.captures(line)?;
        Some(Self {
            target: caps[1].to_string(),
            qualifier: caps[2].parse().ok()?,
            library: caps[3].to_string(),
        })
    }

    fn render(&self) -> String {
        format!(
            "target_link_libraries({} {} {})",
            self.target, self.qualifier, self.library
        )
    }

    fn same_entry(&self, other: &Self) -> bool {
        self.target == other.target
            && self.qualifier == other.qualifier
            && self.library == other.library
    }
}
