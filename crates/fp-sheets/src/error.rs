use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Malformed spreadsheet response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Spreadsheet contained no data {location}")]
    EmptyDataset { location: ErrorLocation },

    #[error("No spreadsheet id found in form link {link:?} {location}")]
    InvalidFormLink {
        link: String,
        location: ErrorLocation,
    },

    #[error("Network failure: {source} {location}")]
    Network {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write artifact {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("PDF generation failed: {message} {location}")]
    Pdf {
        message: String,
        location: ErrorLocation,
    },
}

impl SheetsError {
    /// Creates MalformedResponse at caller location.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates EmptyDataset at caller location.
    #[track_caller]
    pub fn empty_dataset() -> Self {
        Self::EmptyDataset {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidFormLink at caller location.
    #[track_caller]
    pub fn invalid_form_link(link: impl Into<String>) -> Self {
        Self::InvalidFormLink {
            link: link.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Io at caller location.
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Pdf at caller location.
    #[track_caller]
    pub fn pdf(message: impl Into<String>) -> Self {
        Self::Pdf {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SheetsError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Network {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SheetsResult<T> = StdResult<T, SheetsError>;
