//! Infrastructure layer - external adapters (HTTP, filesystem, clipboard).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod clipboard;
pub mod settings_file;
pub mod share_client;
pub mod vault;

pub use clipboard::SystemClipboard;
pub use settings_file::FileSettingsStore;
#[cfg(test)]
pub use settings_file::MemorySettingsStore;
pub use share_client::ShareClient;
pub use vault::Vault;
