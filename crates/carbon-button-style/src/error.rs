//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name does not match any colour-override key.
    #[error("Unknown colour override key '{key}'")]
    UnknownOverrideKey { key: String },
}

impl Error {
    /// Create an unknown-key error.
    pub fn unknown_override_key(key: impl Into<String>) -> Self {
        Self::UnknownOverrideKey { key: key.into() }
    }
}
