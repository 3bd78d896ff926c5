//! Domain-level error types for share-note.
//!
//! All errors are typed with `thiserror`. Share failures reported by the
//! server are not errors: they travel as [`crate::domain::PublishOutcome`]
//! values so the workflow can keep the dialog open and let the user retry.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level errors raised by host adapters and storage.
#[derive(Error, Debug)]
pub enum AppError {
    /// Publish was invoked without an open note.
    #[error("No active note to share!")]
    NoActiveDocument,

    /// The requested note does not exist.
    #[error("Note not found: {path}")]
    NoteNotFound { path: PathBuf },

    /// The HTTP exchange with the share server failed before a response.
    #[error("Failed to share note: {message}")]
    Network { message: String },

    /// The share server answered with a non-success status.
    #[error("{message}")]
    Rejected { message: String },

    /// The share server answered 2xx but the body is unusable.
    #[error("Malformed response from share server: {message}")]
    MalformedResponse { message: String },

    /// Writing to the system clipboard failed.
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    /// Persisting settings failed.
    #[error("Failed to save settings: {message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A publish action ended without a share URL.
    #[error("Note not published: {reason}")]
    NotPublished { reason: String },

    /// Reading user input from the dialog failed.
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a persistence error wrapping the underlying cause.
    pub fn persistence(
        message: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a rejection error for a non-success HTTP status.
    ///
    /// Without server detail the message is the plain generic text.
    pub fn rejected(status: u16, detail: Option<&str>) -> Self {
        let message = match detail {
            Some(detail) if !detail.trim().is_empty() => {
                format!("Failed to share note: {} (HTTP {status})", detail.trim())
            }
            _ => "Failed to share note".to_string(),
        };
        Self::Rejected { message }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }

    /// Create a clipboard error from any displayable cause.
    pub fn clipboard(err: impl std::fmt::Display) -> Self {
        Self::Clipboard {
            message: err.to_string(),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
