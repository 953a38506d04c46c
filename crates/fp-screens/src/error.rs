use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use fp_client::ClientError;
use fp_sheets::SheetsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("You do not have permission to view this screen {location}")]
    PermissionDenied { location: ErrorLocation },

    #[error("No edit in progress {location}")]
    NoActiveEdit { location: ErrorLocation },

    #[error("No user with id {id} in the current list {location}")]
    UnknownUser { id: i64, location: ErrorLocation },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Sheets(#[from] SheetsError),
}

impl ScreenError {
    /// Creates PermissionDenied at caller location.
    #[track_caller]
    pub fn permission_denied() -> Self {
        Self::PermissionDenied {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NoActiveEdit at caller location.
    #[track_caller]
    pub fn no_active_edit() -> Self {
        Self::NoActiveEdit {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownUser at caller location.
    #[track_caller]
    pub fn unknown_user(id: i64) -> Self {
        Self::UnknownUser {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ScreenResult<T> = StdResult<T, ScreenError>;
