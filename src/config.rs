use std::env;
use std::path::PathBuf;

use crate::assets::domain::asset::AssetPaths;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub assets: AssetPaths,
}

/// Non-blank value of `key`, if set.
fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads from `lookup`, so tests need
    /// not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = non_blank(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_blank(&lookup, "PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let root = non_blank(&lookup, "PORTFOLIO_ASSETS_DIR").unwrap_or_else(|| ".".to_string());
        let mut assets = AssetPaths::under(root);

        if let Some(path) = non_blank(&lookup, "PORTFOLIO_CSS_FILE") {
            assets.css_file = PathBuf::from(path);
        }
        if let Some(path) = non_blank(&lookup, "PORTFOLIO_RESUME_FILE") {
            assets.resume_file = PathBuf::from(path);
        }
        if let Some(path) = non_blank(&lookup, "PORTFOLIO_PROFILE_PIC_FILE") {
            assets.profile_picture_file = PathBuf::from(path);
        }

        Ok(Self { host, port, assets })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
