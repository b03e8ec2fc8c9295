//! Window manager backend trait definition.

use std::collections::BTreeSet;

use crate::window::Rect;
use crate::wm::errors::WmError;

/// Interface to the running window manager.
///
/// Listing methods return raw tool output; parsing lives in
/// [`crate::window`] so it can be tested without a display.
pub trait WindowManagerBackend {
    /// The canonical name of this backend (e.g., "wmctrl").
    fn name(&self) -> &'static str;

    /// Check if the tools this backend shells out to are installed.
    fn is_available(&self) -> bool;

    /// Raw window listing, one window per line.
    fn list_windows(&self) -> Result<String, WmError>;

    /// Raw desktop listing, one desktop per line.
    fn list_desktops(&self) -> Result<String, WmError>;

    /// EWMH state flags of one window, without the `_NET_WM_STATE_` prefix.
    fn window_state(&self, window_id: &str) -> Result<BTreeSet<String>, WmError>;

    /// Move and resize a window.
    fn apply_geometry(&self, window_id: &str, rect: &Rect) -> Result<(), WmError>;

    /// Replace the EWMH state flags of a window.
    fn set_state_flags(&self, window_id: &str, flags: &BTreeSet<String>) -> Result<(), WmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockBackend {
        available: bool,
    }

    impl WindowManagerBackend for MockBackend {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn list_windows(&self) -> Result<String, WmError> {
            Ok("0x1 0 1 0 0 10 10 a.A host title\n".to_string())
        }

        fn list_desktops(&self) -> Result<String, WmError> {
            Ok(String::new())
        }

        fn window_state(&self, _window_id: &str) -> Result<BTreeSet<String>, WmError> {
            Ok(BTreeSet::new())
        }

        fn apply_geometry(&self, _window_id: &str, _rect: &Rect) -> Result<(), WmError> {
            if self.available {
                Ok(())
            } else {
                Err(WmError::ToolNotFound {
                    tool: "mock".to_string(),
                })
            }
        }

        fn set_state_flags(
            &self,
            _window_id: &str,
            _flags: &BTreeSet<String>,
        ) -> Result<(), WmError> {
            Ok(())
        }
    }

    #[test]
    fn mock_backend_available() {
        let backend = MockBackend { available: true };
        assert_eq!(backend.name(), "mock");
        assert!(backend.is_available());
        assert!(backend.apply_geometry("0x1", &Rect::default()).is_ok());
        assert!(backend.list_windows().unwrap().starts_with("0x1"));
    }

    #[test]
    fn mock_backend_unavailable() {
        let backend = MockBackend { available: false };
        assert!(!backend.is_available());
        assert!(backend.apply_geometry("0x1", &Rect::default()).is_err());
    }
}
