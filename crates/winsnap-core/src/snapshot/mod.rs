//! Snapshot persistence: the full window and desktop state in one JSON file.

mod errors;
mod store;
mod types;

pub use errors::SnapshotError;
pub use store::{load_snapshot, save_snapshot};
pub use types::{SNAPSHOT_VERSION, Snapshot};
pub(crate) use types::WindowEntry;
