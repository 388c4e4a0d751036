use serde::Serialize;
use thiserror::Error;

/// Unified error type for the sentiment adapters.
///
/// Classification itself cannot fail; these cover reading input, encoding
/// output and running the server. Serializes to JSON as
/// `{"type": ..., "details": {...}}`.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl AppError {
    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a Server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (user can retry or take action)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Transient: stdin hiccups, port already in use
            Self::Io { .. } | Self::Server { .. } => true,
            // Bad input won't change on retry
            Self::Parse { .. } => false,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::parse(err.to_string())
    }
}

// CLI commands report errors as plain strings
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
