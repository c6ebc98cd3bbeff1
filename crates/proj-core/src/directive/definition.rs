use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::Directive;

static DEFINITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*target_compile_definitions\s*\(\s*(\S+)\s+(PUBLIC|PRIVATE|INTERFACE)\s+-D([A-Za-z_][A-Za-z0-9_]*)(?:=(.*?))?\s*\)\s*$",
    )
    .expect("Invalid compile definition regex")
});

/// Scope keyword of a compile definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    Public,
    Private,
    Interface,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Interface => "INTERFACE",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            "INTERFACE" => Ok(Self::Interface),
            _ => Err(format!("unknown visibility '{}'", s)),
        }
    }
}

/// `target_compile_definitions(<target> <visibility> -D<symbol>[=<value>])`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileDefinition {
    pub target: String,
    pub visibility: Visibility,
    pub symbol: String,
    pub value: Option<String>,
}

impl Directive for CompileDefinition {
    const KIND: &'static str = "definition";

    fn parse(line: &str) -> Option<Self> {
        let caps = DEFINITION_REGEX.captures(line)?;
        Some(Self {
            target: caps[1].to_string(),
            visibility: caps[2].parse().ok()?,
            symbol: caps[3].to_string(),
            value: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }

    fn render(&self) -> String {
        match &self.value {
            Some(value) => format!(
                "target_compile_definitions({} {} -D{}={})",
                self.target, self.visibility, self.symbol, value
            ),
            None => format!(
                "target_compile_definitions({} {} -D{})",
                self.target, self.visibility, self.symbol
            ),
        }
    }

    fn same_entry(&self, other: &Self) -> bool {
        self.target == other.target
            && self.visibility == other.visibility
            && self.symbol == other.symbol
    }
}
