//! Global lineup configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{LineupError, LineupResult};

static DEFAULT_BASE_URL: &str = "http://localhost:3000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Global configuration at ~/.config/lineup/config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Backend base URL, e.g. http://localhost:3000
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    pub fn config_path() -> LineupResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LineupError::Config("Could not determine config directory".into()))?
            .join("lineup");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> LineupResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> LineupResult<Self> {
        toml::from_str(content)
            .map_err(|e| LineupError::Serialization(format!("Invalid config file: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_parse_config_toml() {
        let config = Config::from_toml(r#"base_url = "https://api.festival.example""#).unwrap();
        assert_eq!(config.base_url, "https://api.festival.example");

        // Empty file falls back to the default
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_malformed_toml_is_a_serialization_error() {
        let err = Config::from_toml("base_url = [").unwrap_err();
        assert!(matches!(err, LineupError::Serialization(_)));
    }
}
