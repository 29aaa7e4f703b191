//! Application configuration
//!
//! Configuration loaded from .stargazer.toml, with environment overrides.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "STARGAZER_API_URL";
/// Environment variable overriding `storage_file`
pub const STORAGE_FILE_ENV: &str = "STARGAZER_STORAGE_FILE";

/// Application configuration loaded from .stargazer.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Versioned API base, e.g. "http://localhost:5000/api/v1"
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How long an alert stays visible before it is cleared
    #[serde(default = "default_alert_timeout_ms")]
    pub alert_timeout_ms: u64,

    /// Per-request timeout. Unset means the transport default applies.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Location of the local storage file (defaults to the data directory)
    #[serde(default)]
    pub storage_file: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api/v1".to_string()
}

fn default_alert_timeout_ms() -> u64 {
    3000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            alert_timeout_ms: default_alert_timeout_ms(),
            request_timeout_secs: None,
            storage_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// Environment overrides are applied on top.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some((path, content)) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("Overriding api_base_url from {}", API_URL_ENV);
            self.api_base_url = url;
        }
        if let Some(file) = lookup(STORAGE_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("Overriding storage_file from {}", STORAGE_FILE_ENV);
            self.storage_file = Some(PathBuf::from(file));
        }
        self
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.alert_timeout_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolve the local storage file, falling back to the data directory
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage_file {
            Some(path) => Ok(path.clone()),
            None => crate::local_storage_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api/v1");
        assert_eq!(config.alert_timeout(), Duration::from_millis(3000));
        assert!(config.request_timeout().is_none());
        assert!(config.storage_file.is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            api_base_url = "https://stargazer.example.com/api/v1"
            request_timeout_secs = 10
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_base_url, "https://stargazer.example.com/api/v1");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        // Other fields should use defaults
        assert_eq!(config.alert_timeout_ms, 3000);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default().with_overrides(|key| match key {
            API_URL_ENV => Some("http://api.test/v1".to_string()),
            STORAGE_FILE_ENV => Some("/tmp/stargazer.json".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "http://api.test/v1");
        assert_eq!(
            config.storage_path().unwrap(),
            PathBuf::from("/tmp/stargazer.json")
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig::default().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
