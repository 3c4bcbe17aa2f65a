use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, DEFAULT_CATALOG_URL,
    DEFAULT_PROFILE_API_URL,
};

use serde::Deserialize;

/// Endpoints of the remote collaborators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the auth provider (GoTrue-compatible REST API)
    pub auth_url: String,
    /// Public API key sent with auth requests. Never logged.
    pub api_key: Option<String>,
    /// Base URL of the profile and OTP service
    pub profile_api_url: String,
    /// Base URL serving `mock-data/*.json` catalog files
    pub catalog_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            auth_url: String::from(DEFAULT_AUTH_URL),
            api_key: None,
            profile_api_url: String::from(DEFAULT_PROFILE_API_URL),
            catalog_url: String::from(DEFAULT_CATALOG_URL),
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("remote.auth_url", &self.auth_url)?;
        Self::validate_url("remote.profile_api_url", &self.profile_api_url)?;
        Self::validate_url("remote.catalog_url", &self.catalog_url)?;

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::remote("remote.api_key cannot be blank"));
        }

        Ok(())
    }

    fn validate_url(field: &str, value: &str) -> ConfigErrorResult<()> {
        if !(value.starts_with("http://") || value.starts_with("https://")) {
            return Err(ConfigError::remote(format!(
                "{field} must start with http:// or https://, got '{value}'"
            )));
        }
        Ok(())
    }
}
