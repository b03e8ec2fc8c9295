use std::path::Path;

use tracing::{error, info};

use super::errors::SnapshotError;
use super::types::{SNAPSHOT_VERSION, Snapshot};

/// Write the whole snapshot to `path`, replacing whatever was there.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SnapshotError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::SaveFailed {
        message: format!("Failed to serialize snapshot: {}", e),
    })?;

    std::fs::write(path, json).map_err(|e| SnapshotError::SaveFailed {
        message: format!("Failed to write snapshot file ({}): {}", path.display(), e),
    })?;

    info!(
        event = "core.snapshot.saved",
        path = %path.display(),
        windows = snapshot.windows.len(),
        desktops = snapshot.desktops.len()
    );
    Ok(())
}

/// Read a snapshot written by [`save_snapshot`].
///
/// Missing, empty and structurally invalid files are all errors; there is
/// nothing to restore from a partial snapshot.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let path_str = path.display().to_string();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SnapshotError::NotFound { path: path_str });
        }
        Err(e) => {
            return Err(SnapshotError::ReadFailed {
                path: path_str,
                source: e,
            });
        }
    };

    if content.trim().is_empty() {
        return Err(SnapshotError::Empty { path: path_str });
    }

    let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
        error!(
            event = "core.snapshot.json_parse_failed",
            path = %path_str,
            error = %e
        );
        SnapshotError::Invalid {
            path: path_str.clone(),
            message: e.to_string(),
        }
    })?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: snapshot.version,
            supported: SNAPSHOT_VERSION,
        });
    }

    info!(
        event = "core.snapshot.loaded",
        path = %path_str,
        windows = snapshot.windows.len(),
        desktops = snapshot.desktops.len()
    );
    Ok(snapshot)
}
