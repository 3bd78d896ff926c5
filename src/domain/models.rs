//! Domain models for a single publish action.
//!
//! Every value here is transient: built for one submit and dropped after.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Reference to a note the host can read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteHandle {
    /// Location of the note.
    pub path: PathBuf,
}

impl NoteHandle {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// File name shown to the user.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Options the user picks in the publish dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Per-note password. Empty means the note is not password protected.
    pub password: String,
    /// Ask the server to delete the note after its first view.
    pub expire_after_read: bool,
}

/// Body of `POST /create/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub content: String,
    pub expire_after_read: bool,
    pub password: String,
}

impl ShareRequest {
    /// Build a request from captured note content and dialog options.
    #[must_use]
    pub fn new(content: impl Into<String>, options: PublishOptions) -> Self {
        Self {
            content: content.into(),
            expire_after_read: options.expire_after_read,
            password: options.password,
        }
    }
}

/// Success body of `POST /create/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareResponse {
    pub url: String,
}

/// Result of one call to the share server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Success { url: String },
    Failure { message: String },
}

impl From<crate::domain::Result<ShareResponse>> for PublishOutcome {
    fn from(result: crate::domain::Result<ShareResponse>) -> Self {
        match result {
            Ok(response) => Self::Success { url: response.url },
            Err(err) => Self::Failure {
                message: err.to_string(),
            },
        }
    }
}

/// How one invocation of the publish workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishReport {
    /// The note was shared. `copied` is false when the clipboard write failed.
    Published { url: String, copied: bool },
    /// Nothing was open; no request was made.
    NoActiveNote,
    /// The note content could not be read; no request was made.
    ReadFailed,
    /// The user closed the dialog without a successful share.
    Dismissed { failed_attempts: usize },
}

impl PublishReport {
    /// Share URL, or an error when the action counts as failed.
    ///
    /// Dismissing before any submit is a cancellation, not a failure.
    ///
    /// # Errors
    /// Returns [`AppError::NotPublished`] for a missing note, an unreadable
    /// note or a dialog dismissed after failed attempts.
    pub fn into_url(self) -> crate::domain::Result<Option<String>> {
        let reason = match self {
            Self::Published { url, .. } => return Ok(Some(url)),
            Self::Dismissed { failed_attempts: 0 } => return Ok(None),
            Self::Dismissed { failed_attempts } => {
                format!("share failed after {failed_attempts} attempt(s)")
            }
            Self::NoActiveNote => "no active note".to_string(),
            Self::ReadFailed => "note could not be read".to_string(),
        };
        Err(AppError::NotPublished { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_body_uses_snake_case_key() {
        let request = ShareRequest::new(
            "hello",
            PublishOptions {
                password: "pw".into(),
                expire_after_read: true,
            },
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["expire_after_read"], serde_json::Value::Bool(true));
        assert!(body.get("expireAfterRead").is_none());
        assert_eq!(body["content"], "hello");
        assert_eq!(body["password"], "pw");
    }

    #[test]
    fn test_default_options() {
        let options = PublishOptions::default();
        assert!(options.password.is_empty());
        assert!(!options.expire_after_read);
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: crate::domain::Result<ShareResponse> = Ok(ShareResponse {
            url: "https://example.com/abc".into(),
        });
        assert_eq!(
            PublishOutcome::from(ok),
            PublishOutcome::Success {
                url: "https://example.com/abc".into()
            }
        );

        let err: crate::domain::Result<ShareResponse> = Err(AppError::rejected(500, None));
        assert_eq!(
            PublishOutcome::from(err),
            PublishOutcome::Failure {
                message: "Failed to share note".into()
            }
        );
    }

    #[test]
    fn test_report_into_url() {
        let published = PublishReport::Published {
            url: "https://example.com/abc".into(),
            copied: false,
        };
        assert_eq!(
            published.into_url().unwrap().as_deref(),
            Some("https://example.com/abc")
        );
        assert_eq!(
            PublishReport::Dismissed { failed_attempts: 0 }
                .into_url()
                .unwrap(),
            None
        );

        let failed = PublishReport::Dismissed { failed_attempts: 2 }
            .into_url()
            .unwrap_err();
        assert_eq!(
            failed.to_string(),
            "Note not published: share failed after 2 attempt(s)"
        );
        assert!(matches!(
            PublishReport::NoActiveNote.into_url(),
            Err(AppError::NotPublished { .. })
        ));
        assert!(matches!(
            PublishReport::ReadFailed.into_url(),
            Err(AppError::NotPublished { .. })
        ));
    }

    #[test]
    fn test_display_name() {
        let note = NoteHandle::new(PathBuf::from("/vault/daily/2024-01-01.md"));
        assert_eq!(note.display_name(), "2024-01-01.md");
    }
}
