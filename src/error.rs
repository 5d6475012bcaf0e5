//! Error types for email normalization

use thiserror::Error;

/// Errors that can occur while normalizing email addresses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The address has no `@` separating local part and domain
    #[error("missing '@' separator in {0:?}")]
    MissingSeparator(String),

    /// Nothing is left of the local part once the plus-tag and dots are removed
    #[error("empty local part in {0:?}")]
    EmptyLocalPart(String),

    /// Nothing follows the `@`
    #[error("empty domain in {0:?}")]
    EmptyDomain(String),

    /// A list entry failed to normalize
    #[error("invalid entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<Self>,
    },
}

impl NormalizeError {
    /// The raw address that was rejected
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::MissingSeparator(s) | Self::EmptyLocalPart(s) | Self::EmptyDomain(s) => s,
            Self::InvalidEntry { source, .. } => source.address(),
        }
    }
}

/// Result type for normalization operations
pub type Result<T> = std::result::Result<T, NormalizeError>;
