use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigResult, LoggingConfig,
    StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `FP_CONFIG_DIR` env var, else `./.fp/`
    /// 2. `config.toml` inside that directory if present, else defaults
    /// 3. `FP_*` environment variable overrides
    ///
    /// Does NOT validate - call `validate()` after `load()`.
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_dir().join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Config directory: `FP_CONFIG_DIR` env var, else `./.fp/`.
    pub fn config_dir() -> PathBuf {
        std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".fp"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FP_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(dir) = std::env::var("FP_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(level) = std::env::var("FP_LOG_LEVEL") {
            self.logging.level = level.parse().unwrap_or_default();
        }
    }

    /// Validate all sections. Call after `load()` so every problem surfaces
    /// at startup.
    pub fn validate(&self) -> ConfigResult<()> {
        self.api.validate()?;
        // Resolving the data dir is the only storage check that can fail.
        self.storage.data_dir()?;
        Ok(())
    }

    /// Path of the durable identity slot file.
    pub fn identity_path(&self) -> ConfigResult<PathBuf> {
        Ok(self.storage.data_dir()?.join("identity.json"))
    }

    /// Log configuration summary. Never logs credentials.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.base_url);
        match self.storage.data_dir() {
            Ok(dir) => info!("  data dir: {}", dir.display()),
            Err(_) => info!("  data dir: <unresolved>"),
        }
        info!("  exports: {}", self.storage.export_dir().display());
        info!("  log level: {:?}", self.logging.level);
    }
}
