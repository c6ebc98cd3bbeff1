//! Semantic add/remove requests.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::directive::{CompileDefinition, LinkLibrary, LinkQualifier, Subdirectory, Visibility};
use crate::error::{Error, Result};
use crate::project::regions;

/// A group of items that lives in one named region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Sources,
    Headers,
    Exports,
    Definitions,
    Subdirs,
    LinkLibraries,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sources,
        Category::Headers,
        Category::Exports,
        Category::Definitions,
        Category::Subdirs,
        Category::LinkLibraries,
    ];

    /// Name of the region holding this category's lines.
    pub fn region_name(self) -> &'static str {
        match self {
            Self::Sources => regions::SOURCES,
            Self::Headers => regions::HEADERS,
            Self::Exports => regions::LIBRARY_EXPORTS,
            Self::Definitions => regions::DEFINITIONS,
            Self::Subdirs => regions::SUBDIRS,
            Self::LinkLibraries => regions::LINK_LIBRARIES,
        }
    }

    /// Whether items of this category are directives bound to the target.
    pub fn needs_target(self) -> bool {
        matches!(self, Self::Definitions | Self::LinkLibraries)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sources => "sources",
            Self::Headers => "headers",
            Self::Exports => "exports",
            Self::Definitions => "definitions",
            Self::Subdirs => "subdirs",
            Self::LinkLibraries => "link-libraries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a request inserts or deletes its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Add,
    Remove,
}

/// A compile definition as requested, before the target is known.
///
/// Parsed from `[VISIBILITY:]SYMBOL[=VALUE]`; visibility defaults to
/// `PRIVATE` and a leading `-D` is accepted. The value may itself contain
/// colons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionItem {
    pub visibility: Visibility,
    pub symbol: String,
    pub value: Option<String>,
}

impl DefinitionItem {
    pub fn for_target(&self, target: &str) -> CompileDefinition {
        CompileDefinition {
            target: target.to_string(),
            visibility: self.visibility,
            symbol: self.symbol.clone(),
            value: self.value.clone(),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_bare_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '(' || c == ')')
}

impl FromStr for DefinitionItem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let (visibility, rest) = match raw.split_once(':') {
            Some((prefix, rest)) => match prefix.parse::<Visibility>() {
                Ok(visibility) => (visibility, rest),
                Err(_) => (Visibility::Private, raw),
            },
            None => (Visibility::Private, raw),
        };

        let rest = rest.strip_prefix("-D").unwrap_or(rest);
        let (symbol, value) = match rest.split_once('=') {
            Some((symbol, value)) => (symbol, Some(value.to_string())),
            None => (rest, None),
        };

        if !is_identifier(symbol) {
            return Err(Error::invalid_item(
                Category::Definitions,
                s,
                "symbol must be a C identifier",
            ));
        }
        if value.as_deref().is_some_and(|v| v.contains(['(', ')', '\n', '\r'])) {
            return Err(Error::invalid_item(
                Category::Definitions,
                s,
                "value must not contain parentheses or line breaks",
            ));
        }

        Ok(Self {
            visibility,
            symbol: symbol.to_string(),
            value,
        })
    }
}

/// A link library as requested, before the target is known.
///
/// Parsed from `[qualifier:]library`; qualifier defaults to `general`. A
/// prefix that is not a qualifier is kept as part of the library, so
/// `C:/libs/z.lib` stays intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub qualifier: LinkQualifier,
    pub library: String,
}

impl LinkItem {
    pub fn for_target(&self, target: &str) -> LinkLibrary {
        LinkLibrary {
            target: target.to_string(),
            qualifier: self.qualifier,
            library: self.library.clone(),
        }
    }
}

impl FromStr for LinkItem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let (qualifier, library) = match raw.split_once(':') {
            Some((prefix, rest)) => match prefix.parse::<LinkQualifier>() {
                Ok(qualifier) => (qualifier, rest),
                Err(_) => (LinkQualifier::General, raw),
            },
            None => (LinkQualifier::General, raw),
        };

        if !is_bare_token(library) {
            return Err(Error::invalid_item(
                Category::LinkLibraries,
                s,
                "library must be a single token without parentheses",
            ));
        }

        Ok(Self {
            qualifier,
            library: library.to_string(),
        })
    }
}

/// Items to add to, or remove from, each category's region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationRequest {
    pub action: Action,
    pub sources: Vec<String>,
    pub headers: Vec<String>,
    pub exports: Vec<String>,
    pub definitions: Vec<DefinitionItem>,
    pub subdirs: Vec<String>,
    pub link_libraries: Vec<LinkItem>,
}

impl MutationRequest {
    pub fn add() -> Self {
        Self::default()
    }

    pub fn remove() -> Self {
        Self {
            action: Action::Remove,
            ..Self::default()
        }
    }

    pub fn with_sources<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_headers<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_exports<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exports.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_subdirs<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirs.extend(items.into_iter().map(Into::into));
        self
    }

    /// Parses and appends definition items.
    pub fn with_definitions<I, S>(mut self, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.definitions.push(item.as_ref().parse()?);
        }
        Ok(self)
    }

    /// Parses and appends link-library items.
    pub fn with_link_libraries<I, S>(mut self, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.link_libraries.push(item.as_ref().parse()?);
        }
        Ok(self)
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Sources => self.sources.len(),
            Category::Headers => self.headers.len(),
            Category::Exports => self.exports.len(),
            Category::Definitions => self.definitions.len(),
            Category::Subdirs => self.subdirs.len(),
            Category::LinkLibraries => self.link_libraries.len(),
        }
    }

    /// Categories that carry at least one item, in fixed order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.count(*category) > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.categories().next().is_none()
    }

    /// Checks the untyped categories. Typed items are checked when parsed.
    pub fn validate(&self) -> Result<()> {
        let line_sets = [
            (Category::Sources, &self.sources),
            (Category::Headers, &self.headers),
            (Category::Exports, &self.exports),
        ];
        for (category, items) in line_sets {
            for item in items {
                if item.trim().is_empty() {
                    return Err(Error::invalid_item(category, item.as_str(), "item is blank"));
                }
                if item.contains(['\n', '\r']) {
                    return Err(Error::invalid_item(
                        category,
                        item.as_str(),
                        "item must be a single line",
                    ));
                }
                if proj_regions::is_sentinel(item) {
                    return Err(Error::invalid_item(
                        category,
                        item.as_str(),
                        "item would be read as a region marker",
                    ));
                }
            }
        }

        if let Some(item) = self.subdirs.iter().find(|item| !is_bare_token(item.trim())) {
            return Err(Error::invalid_item(
                Category::Subdirs,
                item.as_str(),
                "path must be a single token without parentheses",
            ));
        }
        Ok(())
    }

    pub fn subdirectories(&self) -> impl Iterator<Item = Subdirectory> + '_ {
        self.subdirs.iter().map(|path| Subdirectory::new(path.trim()))
    }
}
