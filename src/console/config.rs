use std::path::PathBuf;

use crate::shared::config::{
    AppConfig, AppConfigBuilder, ConfigError, DEFAULT_LOGIN_PATH, DEFAULT_SERVER_URL,
};

/// File name of the persisted bearer token
pub const TOKEN_KEY: &str = "admin_token";

/// Console configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the platform `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = AppConfig::default_file_path();
        let app = AppConfig::load(file.as_deref())?;
        Ok(Self { app })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn login_path(&self) -> &str {
        self.app.login_path.as_deref().unwrap_or(DEFAULT_LOGIN_PATH)
    }

    /// Token file location: explicit setting, else the platform config dir.
    /// `None` only when the platform has no config dir.
    pub fn token_file(&self) -> Option<PathBuf> {
        self.app.token_file.clone().or_else(|| {
            dirs::config_dir().map(|dir| dir.join("realty-admin").join(TOKEN_KEY))
        })
    }
}
