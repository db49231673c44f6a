use std::fmt;

/// Load-time failures. Both variants are fatal to the session's single
/// catalog load; lookup misses are not errors and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The dataset could not be retrieved (network failure, non-OK status).
    Unavailable(String),
    /// The dataset was retrieved but could not be parsed.
    Malformed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unavailable(detail) => write!(f, "catalog unavailable: {detail}"),
            CatalogError::Malformed(detail) => write!(f, "catalog malformed: {detail}"),
        }
    }
}

impl std::error::Error for CatalogError {}
