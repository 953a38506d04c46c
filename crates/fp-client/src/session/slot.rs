//! The single durable storage slot holding the serialized identity.

use crate::session::store_error::{StoreError, StoreResult};

use fp_core::Identity;

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};

/// Result of hydrating the slot - "not found" and "corrupted" both yield an
/// unauthenticated start, but corruption is worth surfacing in the log.
#[derive(Debug)]
pub(crate) struct SlotLoad {
    pub identity: Option<Identity>,
    pub corruption: Option<String>,
}

/// Read the slot. Never fails: any problem hydrates as "not logged in".
pub(crate) fn load(path: &Path) -> SlotLoad {
    if !path.exists() {
        return SlotLoad {
            identity: None,
            corruption: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Could not read identity slot at {path:?}: {e}");
            return SlotLoad {
                identity: None,
                corruption: Some(e.to_string()),
            };
        }
    };

    match serde_json::from_str::<Identity>(&contents) {
        Ok(identity) => {
            info!("Hydrated identity for {}", identity.email);
            SlotLoad {
                identity: Some(identity),
                corruption: None,
            }
        }
        Err(e) => {
            warn!("Identity slot corrupted at {path:?}: {e}");
            SlotLoad {
                identity: None,
                corruption: Some(e.to_string()),
            }
        }
    }
}

/// Persist the identity with an atomic write: temp file, fsync, rename.
/// A crash mid-write leaves the previous slot intact.
pub(crate) fn save(path: &Path, identity: &Identity) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StoreError::dir_creation(parent.to_path_buf(), e))?;
    }

    let json = serde_json::to_string_pretty(identity)?;
    let temp_path = path.with_extension(format!("json.tmp.{}", std::process::id()));

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        file.sync_all()
            .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StoreError::atomic_rename(temp_path, path.to_path_buf(), e)
    })?;

    info!("Saved identity for {}", identity.email);
    Ok(())
}

/// Remove the slot. Missing file is already the desired state.
pub(crate) fn clear(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
