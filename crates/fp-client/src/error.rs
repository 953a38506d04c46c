use crate::StoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Login rejected: {message} {location}")]
    AuthenticationFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not resolve user session (HTTP {status}) {location}")]
    SessionResolutionFailed {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Backend rejected the request (HTTP {status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network failure: {source} {location}")]
    Network {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Identity storage failure: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Creates AuthenticationFailed at caller location.
    #[track_caller]
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SessionResolutionFailed at caller location.
    #[track_caller]
    pub fn session_resolution_failed(status: u16) -> Self {
        Self::SessionResolutionFailed {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Api at caller location.
    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Network {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ClientError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ClientResult<T> = StdResult<T, ClientError>;
