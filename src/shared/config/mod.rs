//! Application configuration module
//!
//! Provides the layered configuration for the console: built-in defaults,
//! an optional TOML file and environment overrides, in that order.

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default backend URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Default login endpoint
pub const DEFAULT_LOGIN_PATH: &str = "/api/admin-users/login";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL
    pub server_url: Option<String>,
    /// Path of the login endpoint
    pub login_path: Option<String>,
    /// Where the bearer token is persisted
    pub token_file: Option<PathBuf>,
}

/// Shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub login_path: Option<String>,
    pub token_file: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if let Some(path) = &self.login_path {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidPath(path.clone()));
            }
        }
        Ok(())
    }

    /// Platform location of `config.toml`, if the platform has a config dir.
    pub fn default_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("realty-admin").join("config.toml"))
    }

    /// Load defaults, then the optional TOML file, then the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = AppConfigBuilder::default();

        if let Some(path) = file {
            if path.exists() {
                let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                builder = builder.merge_file(FileConfig::parse(&raw)?);
            }
        }

        builder.merge_env().build()
    }
}

impl FileConfig {
    /// Parse the contents of a `config.toml`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    login_path: Option<String>,
    token_file: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the login endpoint path
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Set the token file location
    pub fn token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    /// Overlay values present in a parsed config file
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if file.server_url.is_some() {
            self.server_url = file.server_url;
        }
        if file.login_path.is_some() {
            self.login_path = file.login_path;
        }
        if file.token_file.is_some() {
            self.token_file = file.token_file;
        }
        self
    }

    /// Overlay `ADMIN_API_URL`, `ADMIN_LOGIN_PATH` and `ADMIN_TOKEN_FILE`
    pub fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var("ADMIN_API_URL") {
            self.server_url = Some(url);
        }
        if let Ok(path) = std::env::var("ADMIN_LOGIN_PATH") {
            self.login_path = Some(path);
        }
        if let Ok(path) = std::env::var("ADMIN_TOKEN_FILE") {
            self.token_file = Some(PathBuf::from(path));
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url.map(|url| url.trim_end_matches('/').to_string()),
            login_path: self.login_path,
            token_file: self.token_file,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid endpoint path: {0} (must start with '/')")]
    InvalidPath(String),
    #[error("failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("failed to parse config file: {0}")]
    Parse(String),
}
