//! Contracts for the collaborators the host environment provides.
//!
//! The publish workflow only depends on these traits. Everything runs on
//! one cooperative thread, so the async traits do not require `Send`.

use async_trait::async_trait;

use super::{NoteHandle, PublishOptions, PublishOutcome, Result, Settings, ShareRequest};

/// Access to the note currently open in the host.
#[async_trait(?Send)]
pub trait NoteAccessor {
    /// The focused note, if any.
    fn active_note(&self) -> Option<NoteHandle>;

    /// Full text of `note`.
    async fn read_content(&self, note: &NoteHandle) -> Result<String>;
}

/// Severity of a user notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Fire-and-forget user notices.
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// System clipboard.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Transient form collecting the publish options.
#[async_trait(?Send)]
pub trait ShareDialog {
    /// Suspend until the user submits (`Some`) or dismisses (`None`).
    ///
    /// Called again after a failed share while the dialog is still open.
    async fn await_submit(&mut self) -> Result<Option<PublishOptions>>;

    fn close(&mut self);
}

/// One request/response exchange with the share server.
#[async_trait(?Send)]
pub trait ShareBackend {
    async fn share(&self, base_url: &str, secret: &str, request: &ShareRequest) -> PublishOutcome;
}

/// Durable storage for [`Settings`].
pub trait SettingsStore {
    /// Persisted settings overlaid on defaults. Never fails.
    fn load(&self) -> Settings;

    /// Overwrite the persisted settings.
    ///
    /// # Errors
    /// Returns [`super::AppError::Persistence`] if storage is unavailable.
    fn save(&self, settings: &Settings) -> Result<()>;
}
