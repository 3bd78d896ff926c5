//! Settings service.
//!
//! Owns the in-memory settings, which stay the source of truth even when
//! persisting fails. Every edit is saved immediately.

use crate::domain::{Result, Settings, SettingsStore};

/// Explicit handle over the process-wide settings.
pub struct SettingsService<S> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> SettingsService<S> {
    /// Load settings from `store`, falling back to defaults.
    pub fn load(store: S) -> Self {
        let settings = store.load();
        tracing::debug!(api_base_url = %settings.api_base_url, "Settings loaded");
        Self { store, settings }
    }

    /// Current settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Immutable copy for a single share call.
    pub fn snapshot(&self) -> Settings {
        self.settings.clone()
    }

    /// Update the base URL and persist.
    ///
    /// # Errors
    /// Returns the store error; the in-memory value is updated anyway.
    pub fn set_api_base_url(&mut self, value: impl Into<String>) -> Result<()> {
        self.settings.api_base_url = value.into();
        self.save()
    }

    /// Update the shared secret and persist.
    ///
    /// # Errors
    /// Returns the store error; the in-memory value is updated anyway.
    pub fn set_api_password(&mut self, value: impl Into<String>) -> Result<()> {
        self.settings.api_password = value.into();
        self.save()
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.settings).inspect_err(|e| {
            tracing::warn!("Settings not persisted: {e}");
        })
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppError;
    use crate::infrastructure::{FileSettingsStore, MemorySettingsStore};
    use tempfile::tempdir;

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn load(&self) -> Settings {
            Settings::default()
        }

        fn save(&self, _settings: &Settings) -> Result<()> {
            Err(AppError::Persistence {
                message: "storage unavailable".into(),
                source: None,
            })
        }
    }

    #[test]
    fn test_empty_storage_loads_defaults() {
        let service = SettingsService::load(MemorySettingsStore::default());
        assert_eq!(service.settings().api_base_url, "http://localhost:8000");
        assert_eq!(service.settings().api_password, "");
    }

    #[test]
    fn test_edit_roundtrip_keeps_untouched_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut service = SettingsService::load(FileSettingsStore::new(&path));
        service.set_api_base_url("https://share.example.com").unwrap();
        service.set_api_password("token").unwrap();
        service.set_api_base_url("https://other.example.com").unwrap();

        let reloaded = SettingsService::load(FileSettingsStore::new(&path));
        assert_eq!(reloaded.settings().api_base_url, "https://other.example.com");
        assert_eq!(reloaded.settings().api_password, "token");
    }

    #[test]
    fn test_failed_save_keeps_in_memory_value() {
        let mut service = SettingsService::load(BrokenStore);

        let err = service.set_api_password("secret").unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
        assert_eq!(service.settings().api_password, "secret");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut service = SettingsService::load(MemorySettingsStore::default());
        let before = service.snapshot();
        service.set_api_base_url("http://changed").unwrap();

        assert_eq!(before.api_base_url, "http://localhost:8000");
        assert_eq!(service.snapshot().api_base_url, "http://changed");
    }
}
