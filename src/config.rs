//! TOML configuration for service endpoints and preference storage.
//!
//! ```toml
//! [service]
//! base_url = "http://localhost:5000"
//! matrix_path = "/api/matrix"
//! calculus_path = "/api/calculus"
//!
//! [preferences]
//! directory = "/home/me/.config/lambdacalc"
//! ```
//!
//! Every key is optional.

use crate::remote::Endpoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub preferences: PreferencesConfig,
}

impl Config {
    /// Parse a config document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::config::Config;
    /// use lambdacalc::remote::Endpoint;
    ///
    /// let config = Config::from_toml_str("[service]\nbase_url = \"http://calc.local/\"").unwrap();
    /// assert_eq!(config.service.url_for(Endpoint::Matrix), "http://calc.local/api/matrix");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Where the math service lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub matrix_path: String,
    pub calculus_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            matrix_path: "/api/matrix".to_string(),
            calculus_path: "/api/calculus".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn path_for(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Matrix => &self.matrix_path,
            Endpoint::Calculus => &self.calculus_path,
        }
    }

    /// Full URL for an endpoint, joining base and path with a single `/`.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path_for(endpoint).trim_start_matches('/')
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Directory for the preference files; the platform config directory
    /// when unset
    pub directory: Option<PathBuf>,
}

impl PreferencesConfig {
    pub const APP_DIR: &'static str = "lambdacalc";

    /// The configured directory, or `<platform config dir>/lambdacalc`.
    /// `None` only when neither is available.
    pub fn resolve_directory(&self) -> Option<PathBuf> {
        self.directory
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(Self::APP_DIR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.service.url_for(Endpoint::Matrix),
            "http://localhost:5000/api/matrix"
        );
        assert_eq!(
            config.service.url_for(Endpoint::Calculus),
            "http://localhost:5000/api/calculus"
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [service]
            calculus_path = "v2/calculus"
            "#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "http://localhost:5000");
        assert_eq!(
            config.service.url_for(Endpoint::Calculus),
            "http://localhost:5000/v2/calculus"
        );
    }

    #[test]
    fn preference_directory_override() {
        let config = Config::from_toml_str(
            r#"
            [preferences]
            directory = "/tmp/lambdacalc-test"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.preferences.resolve_directory(),
            Some(PathBuf::from("/tmp/lambdacalc-test"))
        );
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::from_toml_str("[service\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load("/nonexistent/lambdacalc.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
