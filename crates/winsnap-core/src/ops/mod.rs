//! Capture and restore operations over a window manager backend.

mod capture;
mod restore;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

pub use capture::{capture_snapshot, list_desktops, list_live_windows};
pub use restore::{apply_instruction, restore_snapshot};
pub use types::{FailedWindow, RestoreOptions, RestoreSummary};
