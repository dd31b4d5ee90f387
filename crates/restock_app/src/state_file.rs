use std::fs;
use std::path::Path;

use monitor_logging::{monitor_info, monitor_warn};
use restock_core::{AvailabilityStatus, LastKnown};
use restock_engine::{write_atomic, PersistError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedState {
    status: String,
    sizes: Vec<String>,
    checked_at: String,
}

#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("failed to serialize state: {0}")]
    Serialize(ron::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Read the last-known record. Missing file means first run; an unreadable or
/// malformed file is logged and treated as first run rather than failing the
/// check.
pub fn load_last_known(path: &Path) -> Option<LastKnown> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            monitor_info!("No state file at {:?}; treating as first run", path);
            return None;
        }
        Err(err) => {
            monitor_warn!("Failed to read state file {:?}: {}", path, err);
            return None;
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            monitor_warn!("Failed to parse state file {:?}: {}", path, err);
            return None;
        }
    };

    let Some(status) = AvailabilityStatus::parse(&state.status) else {
        monitor_warn!(
            "Unknown status {:?} in state file {:?}; treating as first run",
            state.status,
            path
        );
        return None;
    };

    Some(LastKnown {
        status,
        sizes: state.sizes.into_iter().collect(),
        checked_at: state.checked_at,
    })
}

/// Replace the last-known record atomically. Unlike loading, a failed write is
/// an error: silently losing the record would re-send the same alert forever.
pub fn save_last_known(path: &Path, last: &LastKnown) -> Result<(), StateFileError> {
    let state = PersistedState {
        status: last.status.as_str().to_string(),
        sizes: last.sizes.iter().cloned().collect(),
        checked_at: last.checked_at.clone(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(&state, pretty).map_err(StateFileError::Serialize)?;
    write_atomic(path, &content)?;
    Ok(())
}
