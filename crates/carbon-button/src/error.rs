//! Error types for the embedded control.

/// Result type alias for configuration decoding.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors reported by a [`HostChannel`](crate::HostChannel) implementation.
///
/// The controller never propagates these; a failing channel degrades the
/// control to a locally functional, non-reporting one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// No host is attached to the channel.
    #[error("host channel is disconnected")]
    Disconnected,

    /// The host refused the message.
    #[error("host rejected message: {message}")]
    Rejected { message: String },
}

impl ChannelError {
    /// Create a rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Errors that can occur while decoding a host configuration payload.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The payload is not a valid configuration object.
    #[error("invalid configuration payload: {0}")]
    Json(#[from] serde_json::Error),
}
