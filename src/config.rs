//! Service configuration
//!
//! Loaded from a JSON file. Every field has a default, so an empty object is
//! a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Insert the startup records (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            seed: default_seed(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: ServiceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Invalid("http.host must not be empty".into()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Invalid("http.port must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_is_default() {
        let file = write_config("{}");
        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.http.port, 8000);
        assert!(config.seed);
    }

    #[test]
    fn test_load_overrides() {
        let file = write_config(
            r#"{"http": {"host": "127.0.0.1", "port": 9000, "cors_origins": ["http://a.test"]}, "seed": false}"#,
        );
        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.http.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.http.cors_origins, vec!["http://a.test"]);
        assert!(!config.seed);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(r#"{"http": {"port": 0}}"#);
        assert!(matches!(
            ServiceConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let file = write_config(r#"{"http": {"host": "  "}}"#);
        assert!(matches!(
            ServiceConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_and_missing_files() {
        let file = write_config("{ port: ");
        assert!(matches!(
            ServiceConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ServiceConfig::load(&dir.path().join("missing.json")),
            Err(ConfigError::Read(_))
        ));
    }
}
