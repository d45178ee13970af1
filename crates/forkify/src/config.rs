use anyhow::{Context, Result};
use forkify_model::config::{DEFAULT_API_URL, DEFAULT_PAGE_CAPACITY, DEFAULT_TIMEOUT_SECS};
use forkify_model::ModelConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `api.key` is empty
pub const API_KEY_ENV: &str = "FORKIFY_API_KEY";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,

    #[serde(default)]
    pub key: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_page_capacity")]
    pub page_capacity: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewConfig {
    #[serde(default = "default_icons")]
    pub icons: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_page_capacity() -> usize {
    DEFAULT_PAGE_CAPACITY
}

fn default_storage_path() -> String {
    "~/.forkify/bookmarks.db".to_string()
}

fn default_icons() -> String {
    "img/icons.svg".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_capacity: default_page_capacity(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            icons: default_icons(),
        }
    }
}

impl Config {
    /// API key from config, falling back to the environment
    pub fn api_key(&self) -> String {
        if self.api.key.is_empty() {
            std::env::var(API_KEY_ENV).unwrap_or_default()
        } else {
            self.api.key.clone()
        }
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::new(&self.api.url, &self.api_key())
            .with_page_capacity(self.search.page_capacity)
    }

    /// Bookmark database path with `~` expanded
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.storage.path).to_string())
    }
}

/// Load config from file or use defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let content =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            key = "abc"

            [search]
            page_capacity = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.api_key(), "abc");
        assert_eq!(config.model_config().page_capacity, 5);
        assert_eq!(config.view.icons, "img/icons.svg");
    }

    #[test]
    fn test_storage_path_expands_tilde() {
        let mut config = Config::default();
        assert!(!config.storage_path().starts_with("~"));
        assert!(config.storage_path().ends_with(".forkify/bookmarks.db"));

        config.storage.path = "/var/lib/forkify/bookmarks.db".into();
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/var/lib/forkify/bookmarks.db")
        );
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        assert!(load_config(Some(Path::new("/nonexistent/forkify.toml"))).is_err());
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: Config = toml::from_str(crate::commands::init::DEFAULT_CONFIG).unwrap();
        assert_eq!(config.search.page_capacity, DEFAULT_PAGE_CAPACITY);
        assert_eq!(config.api.url, DEFAULT_API_URL);
    }
}
