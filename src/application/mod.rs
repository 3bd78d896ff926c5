//! Application layer - use cases and orchestration.
//!
//! This layer wires the host collaborators together for publishing
//! notes and editing settings.

pub mod publish;
pub mod settings_service;

pub use publish::PublishWorkflow;
pub use settings_service::SettingsService;
