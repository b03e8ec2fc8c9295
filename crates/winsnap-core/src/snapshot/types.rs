use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::window::{DesktopRecord, Position, Size, WindowRecord};

/// On-disk format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time capture of every window and desktop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub version: u32,
    pub captured_at: DateTime<Utc>,
    pub windows: Vec<WindowRecord>,
    pub desktops: Vec<DesktopRecord>,
}

impl Snapshot {
    pub fn new(windows: Vec<WindowRecord>, desktops: Vec<DesktopRecord>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            captured_at: Utc::now(),
            windows,
            desktops,
        }
    }
}

/// Serialized shape of a [`WindowRecord`], discriminated by `type`.
///
/// `Window` is a bare listing entry; `WindowWithCmd` carries the owning
/// process's command line and must have one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum WindowEntry {
    Window(PlainWindow),
    WindowWithCmd(CommandWindow),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PlainWindow {
    id: String,
    desktop: i32,
    process_id: u32,
    position: Position,
    size: Size,
    class_name: String,
    owner_name: String,
    title: String,
    state_flags: Option<BTreeSet<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CommandWindow {
    id: String,
    desktop: i32,
    process_id: u32,
    position: Position,
    size: Size,
    class_name: String,
    owner_name: String,
    title: String,
    command_line: Vec<String>,
    state_flags: Option<BTreeSet<String>>,
}

impl From<WindowRecord> for WindowEntry {
    fn from(w: WindowRecord) -> Self {
        match w.command_line {
            Some(command_line) => WindowEntry::WindowWithCmd(CommandWindow {
                id: w.id,
                desktop: w.desktop,
                process_id: w.process_id,
                position: w.position,
                size: w.size,
                class_name: w.class_name,
                owner_name: w.owner_name,
                title: w.title,
                command_line,
                state_flags: w.state_flags,
            }),
            None => WindowEntry::Window(PlainWindow {
                id: w.id,
                desktop: w.desktop,
                process_id: w.process_id,
                position: w.position,
                size: w.size,
                class_name: w.class_name,
                owner_name: w.owner_name,
                title: w.title,
                state_flags: w.state_flags,
            }),
        }
    }
}

impl From<WindowEntry> for WindowRecord {
    fn from(entry: WindowEntry) -> Self {
        match entry {
            WindowEntry::Window(w) => WindowRecord {
                id: w.id,
                desktop: w.desktop,
                process_id: w.process_id,
                position: w.position,
                size: w.size,
                class_name: w.class_name,
                owner_name: w.owner_name,
                title: w.title,
                command_line: None,
                state_flags: w.state_flags,
            },
            WindowEntry::WindowWithCmd(w) => WindowRecord {
                id: w.id,
                desktop: w.desktop,
                process_id: w.process_id,
                position: w.position,
                size: w.size,
                class_name: w.class_name,
                owner_name: w.owner_name,
                title: w.title,
                command_line: Some(w.command_line),
                state_flags: w.state_flags,
            },
        }
    }
}
