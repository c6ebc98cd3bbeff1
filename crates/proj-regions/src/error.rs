//! Error types for proj-regions

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "unexpected region close marker '{found}' at line {line} (expected '{}')",
        .expected.as_deref().unwrap_or("<no open region>")
    )]
    UnexpectedCloseMarker {
        found: String,
        expected: Option<String>,
        line: usize,
    },

    #[error("missing region close marker (expected '{expected}')")]
    MissingCloseMarker { expected: String },

    #[error("invalid region name '{name}' at line {line}: names must not contain whitespace")]
    InvalidRegionName { name: String, line: usize },

    #[error("region not found: {name}")]
    RegionNotFound { name: String },
}

impl Error {
    /// Whether this error means the sentinel structure itself is broken.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedCloseMarker { .. }
                | Self::MissingCloseMarker { .. }
                | Self::InvalidRegionName { .. }
        )
    }
}
