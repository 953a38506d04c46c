use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] fp_config::ConfigError),

    #[error(transparent)]
    Client(#[from] fp_client::ClientError),

    #[error(transparent)]
    Screen(#[from] fp_screens::ScreenError),

    /// A screen reported an inline error message instead of data.
    #[error("{message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    AccessDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("I/O error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Creates Backend at caller location.
    #[track_caller]
    pub fn backend(message: &str) -> Self {
        Self::Backend {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AccessDenied at caller location.
    #[track_caller]
    pub fn access_denied(message: &str) -> Self {
        Self::AccessDenied {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger at caller location.
    #[track_caller]
    pub fn logger(message: String) -> Self {
        Self::Logger {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Io at caller location.
    #[track_caller]
    pub fn io(message: &str, source: std::io::Error) -> Self {
        Self::Io {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type CliResult<T> = StdResult<T, CliError>;
