//! Error types for plugrule

use thiserror::Error;

/// Result type alias for plugrule operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for plugrule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A rule was declared with an empty key
    #[error("Key cannot be empty")]
    EmptyKey,
}

impl Error {
    /// Check if this error was caused by an invalid rule key
    #[must_use]
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::EmptyKey)
    }
}
