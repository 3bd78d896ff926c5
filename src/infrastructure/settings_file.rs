//! Settings file management.
//!
//! Handles loading and saving the TOML settings blob.

#[cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result, Settings, SettingsStore};

/// Application directory name under the platform data directory.
const APP_DIR_NAME: &str = "share-note";
const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Get the default settings file path.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(SETTINGS_FILE_NAME)
}

/// Settings persisted as a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(default_settings_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
            return Settings::default();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read settings file: {e}");
                return Settings::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), "Failed to parse settings file: {e}");
            Settings::default()
        })
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::persistence("Failed to create settings directory", e))?;
        }

        let content = toml::to_string_pretty(settings)
            .map_err(|e| AppError::persistence("Failed to serialize settings", e))?;

        fs::write(&self.path, content).map_err(|e| {
            AppError::persistence(
                format!("Failed to write settings file: {}", self.path.display()),
                e,
            )
        })?;

        tracing::info!(path = %self.path.display(), "Settings saved");

        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    blob: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemorySettingsStore {
    /// Store pre-seeded with a raw TOML blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }
}

#[cfg(test)]
impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        self.blob
            .borrow()
            .as_deref()
            .and_then(|blob| toml::from_str(blob).ok())
            .unwrap_or_default()
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let blob = toml::to_string(settings)
            .map_err(|e| AppError::persistence("Failed to serialize settings", e))?;
        *self.blob.borrow_mut() = Some(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.toml"));

        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_load_garbage_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        assert_eq!(FileSettingsStore::new(path).load(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("nested").join("settings.toml"));

        let mut settings = store.load();
        settings.api_password = "hunter2".into();
        store.save(&settings).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.api_password, "hunter2");
        assert_eq!(loaded.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.toml"));

        store
            .save(&Settings {
                api_base_url: "http://one".into(),
                api_password: "a".into(),
            })
            .unwrap();
        store
            .save(&Settings {
                api_base_url: "http://two".into(),
                api_password: String::new(),
            })
            .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.api_base_url, "http://two");
        assert_eq!(loaded.api_password, "");
    }

    #[test]
    fn test_save_into_unwritable_location_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let store = FileSettingsStore::new(blocker.join("settings.toml"));

        let err = store.save(&Settings::default()).unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySettingsStore::with_blob(r#"apiBaseUrl = "https://share.example.com""#);
        let mut settings = store.load();
        assert_eq!(settings.api_password, "");

        settings.api_password = "token".into();
        store.save(&settings).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.api_base_url, "https://share.example.com");
        assert_eq!(loaded.api_password, "token");
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        let path = default_settings_path();
        assert!(path.ends_with("share-note/settings.toml"));
    }
}
