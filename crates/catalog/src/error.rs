use thiserror::Error;

use storefront_core::DomainError;

/// Failure to populate the catalog.
///
/// This is the only fallible path of the catalog; filters and navigation
/// degrade to empty results or no-ops instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("catalog source {location} is unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    #[error("malformed catalog payload: {0}")]
    Malformed(String),

    #[error("invalid product record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: DomainError },
}

impl LoadError {
    pub fn unreachable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unreachable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
