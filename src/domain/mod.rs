//! Domain layer - core types and host collaborator contracts.
//!
//! This layer contains pure domain models, error types and the traits
//! the host environment implements, without any external I/O.

pub mod error;
pub mod host;
pub mod models;
pub mod settings;

pub use error::{AppError, Result};
pub use host::{
    ClipboardWriter, NoteAccessor, NoticeLevel, Notifier, SettingsStore, ShareBackend, ShareDialog,
};
pub use models::{
    NoteHandle, PublishOptions, PublishOutcome, PublishReport, ShareRequest, ShareResponse,
};
pub use settings::Settings;
