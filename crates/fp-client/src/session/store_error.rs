use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures while persisting the identity slot. Reads never produce these:
/// a missing or unreadable slot hydrates as "not logged in".
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create directory {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write identity slot {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize identity: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Creates DirCreation at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
