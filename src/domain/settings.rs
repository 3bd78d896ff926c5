//! Persisted settings for the share server connection.
//!
//! Every field carries its own serde default so a partial blob is
//! overlaid on the defaults field by field.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for the share server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Base URL of the share server, without the `/create/` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Shared secret sent as a bearer token. Empty means no auth configured.
    #[serde(default)]
    pub api_password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_password: String::new(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Settings {
    /// Secret suitable for display: every character replaced by `*`.
    #[must_use]
    pub fn masked_password(&self) -> String {
        if self.api_password.is_empty() {
            "(not set)".to_string()
        } else {
            "*".repeat(self.api_password.chars().count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.api_password, "");
    }

    #[test]
    fn test_partial_blob_overlays_defaults() {
        let settings: Settings = toml::from_str(r#"apiPassword = "s3cret""#).unwrap();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.api_password, "s3cret");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings: Settings =
            toml::from_str("apiBaseUrl = \"https://notes.example.com\"\ntheme = \"dark\"").unwrap();
        assert_eq!(settings.api_base_url, "https://notes.example.com");
        assert_eq!(settings.api_password, "");
    }

    #[test]
    fn test_persisted_key_names() {
        let blob = toml::to_string(&Settings::default()).unwrap();
        assert!(blob.contains("apiBaseUrl"));
        assert!(blob.contains("apiPassword"));
    }

    #[test]
    fn test_masked_password() {
        let mut settings = Settings::default();
        assert_eq!(settings.masked_password(), "(not set)");
        settings.api_password = "abc".into();
        assert_eq!(settings.masked_password(), "***");
    }
}
