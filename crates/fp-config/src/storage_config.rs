use crate::{APP_DIR_NAME, ConfigError, ConfigResult};

use std::path::PathBuf;

use serde::Deserialize;

/// Where durable client state and exported artifacts live.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the identity slot file. Defaults to the platform data
    /// directory (e.g. `~/.local/share/fp-admin`).
    pub data_dir: Option<PathBuf>,
    /// Directory exported CSV/PDF artifacts are written into.
    /// Defaults to the current working directory.
    pub export_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolved data directory; errors only if the platform has none and no
    /// override was configured.
    pub fn data_dir(&self) -> ConfigResult<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoDataDir)
    }

    /// Resolved export directory.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
