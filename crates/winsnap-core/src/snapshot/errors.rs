use crate::errors::WinsnapError;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot file not found: {path}")]
    NotFound { path: String },

    #[error("Snapshot file is empty: {path}")]
    Empty { path: String },

    #[error("Snapshot file '{path}' is invalid: {message}")]
    Invalid { path: String, message: String },

    #[error("Snapshot version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Failed to save snapshot: {message}")]
    SaveFailed { message: String },

    #[error("IO error reading snapshot '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WinsnapError for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            SnapshotError::NotFound { .. } => "SNAPSHOT_NOT_FOUND",
            SnapshotError::Empty { .. } => "SNAPSHOT_EMPTY",
            SnapshotError::Invalid { .. } => "SNAPSHOT_INVALID",
            SnapshotError::UnsupportedVersion { .. } => "SNAPSHOT_UNSUPPORTED_VERSION",
            SnapshotError::SaveFailed { .. } => "SNAPSHOT_SAVE_FAILED",
            SnapshotError::ReadFailed { .. } => "SNAPSHOT_READ_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SnapshotError::NotFound { .. }
                | SnapshotError::Empty { .. }
                | SnapshotError::Invalid { .. }
                | SnapshotError::UnsupportedVersion { .. }
        )
    }
}
