use crate::{ConfigError, ConfigResult, DEFAULT_API_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the accounts backend, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid(format!(
                "api.base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}
