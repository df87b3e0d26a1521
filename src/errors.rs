use thiserror::Error;

/// Error type raised by [`crate::model::ExpenseTrackerModel`] operations.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("Shared model lock poisoned")]
    Poisoned,
}

/// Failure reported by a listener while handling a state change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("listener `{listener}` failed: {message}")]
pub struct ListenerError {
    pub listener: String,
    pub message: String,
}

impl ListenerError {
    pub fn new(listener: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            listener: listener.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
