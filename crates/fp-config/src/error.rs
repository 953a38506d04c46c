use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config error: {message} {location}")]
    Invalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

impl ConfigError {
    /// Create a validation error at the caller's location.
    #[track_caller]
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        ConfigError::Invalid {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigResult<T> = StdResult<T, ConfigError>;
