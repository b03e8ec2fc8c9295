use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// State flag set by the window manager on horizontally maximized windows.
pub const MAXIMIZED_HORZ: &str = "MAXIMIZED_HORZ";
/// State flag set by the window manager on vertically maximized windows.
pub const MAXIMIZED_VERT: &str = "MAXIMIZED_VERT";

/// Top-left corner of a window. Negative on multi-monitor setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    pub left: i32,
    pub top: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// A positioned rectangle, as passed to the window manager's move/resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Same size, shifted right by `dx` pixels.
    pub fn shifted_right(&self, dx: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            ..*self
        }
    }
}

/// One window as reported by the window manager.
///
/// `command_line` and `state_flags` are only present when the owning
/// process and the window's EWMH state could be looked up. Serialized
/// through the tagged snapshot entry shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "crate::snapshot::WindowEntry", from = "crate::snapshot::WindowEntry")]
pub struct WindowRecord {
    /// Window handle (e.g. `0x04400003`). Recycled by the X server.
    pub id: String,
    /// Desktop index, `-1` for sticky / not on any desktop
    pub desktop: i32,
    pub process_id: u32,
    pub position: Position,
    pub size: Size,
    /// `WM_CLASS` as `instance.Class`
    pub class_name: String,
    /// Client machine reported by the window manager
    pub owner_name: String,
    pub title: String,
    pub command_line: Option<Vec<String>>,
    pub state_flags: Option<BTreeSet<String>>,
}

impl WindowRecord {
    pub fn rect(&self) -> Rect {
        Rect {
            left: self.position.left,
            top: self.position.top,
            width: self.size.width,
            height: self.size.height,
        }
    }

    pub fn is_on_desktop(&self) -> bool {
        self.desktop != -1
    }

    /// First command-line token, the program path.
    pub fn program(&self) -> Option<&str> {
        self.command_line
            .as_ref()
            .and_then(|cmd| cmd.first())
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    pub fn is_maximized(&self) -> bool {
        self.state_flags.as_ref().is_some_and(|flags| {
            flags.contains(MAXIMIZED_HORZ) || flags.contains(MAXIMIZED_VERT)
        })
    }

    pub fn with_command_line(mut self, command_line: Vec<String>) -> Self {
        self.command_line = Some(command_line);
        self
    }

    pub fn with_state_flags(mut self, state_flags: BTreeSet<String>) -> Self {
        self.state_flags = Some(state_flags);
        self
    }
}

/// One virtual desktop as reported by `wmctrl -d`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesktopRecord {
    pub index: u32,
    pub is_active: bool,
    pub desktop_geometry: Size,
    /// `None` when the window manager reports `N/A`
    pub viewport: Option<Position>,
    pub working_area: Rect,
    pub name: String,
}
