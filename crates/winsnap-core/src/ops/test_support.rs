//! In-memory backends for exercising capture and restore.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::process::{ProcessInfo, ProcessSource, ProcessTable};
use crate::window::Rect;
use crate::wm::{WindowManagerBackend, WmError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Geometry(String, Rect),
    Flags(String, BTreeSet<String>),
}

#[derive(Default)]
pub(crate) struct FakeWm {
    pub windows: String,
    pub desktops: String,
    pub states: HashMap<String, BTreeSet<String>>,
    /// Handles whose state query or commands fail
    pub broken: HashSet<String>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeWm {
    pub fn new(windows: &str, desktops: &str) -> Self {
        Self {
            windows: windows.to_string(),
            desktops: desktops.to_string(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self, window_id: &str) -> Result<(), WmError> {
        if self.broken.contains(window_id) {
            return Err(WmError::CommandFailed {
                command: format!("fake {}", window_id),
                message: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

impl WindowManagerBackend for FakeWm {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn list_windows(&self) -> Result<String, WmError> {
        Ok(self.windows.clone())
    }

    fn list_desktops(&self) -> Result<String, WmError> {
        Ok(self.desktops.clone())
    }

    fn window_state(&self, window_id: &str) -> Result<BTreeSet<String>, WmError> {
        self.check(window_id)?;
        Ok(self.states.get(window_id).cloned().unwrap_or_default())
    }

    fn apply_geometry(&self, window_id: &str, rect: &Rect) -> Result<(), WmError> {
        self.check(window_id)?;
        self.calls
            .borrow_mut()
            .push(Call::Geometry(window_id.to_string(), *rect));
        Ok(())
    }

    fn set_state_flags(&self, window_id: &str, flags: &BTreeSet<String>) -> Result<(), WmError> {
        self.check(window_id)?;
        self.calls
            .borrow_mut()
            .push(Call::Flags(window_id.to_string(), flags.clone()));
        Ok(())
    }
}

pub(crate) struct FakeProcesses(pub Vec<ProcessInfo>);

impl ProcessSource for FakeProcesses {
    fn list_processes(&self) -> ProcessTable {
        self.0.iter().cloned().collect()
    }
}

pub(crate) fn process(pid: u32, command_line: &[&str]) -> ProcessInfo {
    ProcessInfo {
        pid,
        name: command_line.first().copied().unwrap_or_default().to_string(),
        owner: Some("alice".to_string()),
        command_line: command_line.iter().map(|a| a.to_string()).collect(),
    }
}

pub(crate) fn flags(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}
