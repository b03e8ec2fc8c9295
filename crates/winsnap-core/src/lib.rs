//! Core library for winsnap.
//!
//! Captures window geometry from an EWMH window manager into a snapshot file
//! and reconciles a stored snapshot against the live window list to put
//! windows back where they were.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod ops;
pub mod process;
pub mod reconcile;
pub mod snapshot;
pub mod window;
pub mod wm;

pub use config::WinsnapConfig;
pub use errors::WinsnapError;
pub use logging::init_logging;
pub use ops::{
    RestoreOptions, RestoreSummary, capture_snapshot, list_live_windows, restore_snapshot,
};
pub use snapshot::{Snapshot, load_snapshot, save_snapshot};
pub use window::{DesktopRecord, Position, Rect, Size, WindowRecord};
