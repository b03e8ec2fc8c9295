use std::collections::HashMap;

/// Information about a running process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    /// Login name of the owning user, if it could be resolved
    pub owner: Option<String>,
    pub command_line: Vec<String>,
}

/// Processes keyed by pid, taken at one point in time.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: HashMap<u32, ProcessInfo>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, info: ProcessInfo) {
        self.processes.insert(info.pid, info);
    }

    /// Returns `None` when the process exited before the table was taken.
    pub fn lookup(&self, pid: u32) -> Option<&ProcessInfo> {
        self.processes.get(&pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl FromIterator<ProcessInfo> for ProcessTable {
    fn from_iter<I: IntoIterator<Item = ProcessInfo>>(iter: I) -> Self {
        let mut table = ProcessTable::new();
        for info in iter {
            table.insert(info);
        }
        table
    }
}

/// Source of process information.
pub trait ProcessSource {
    fn list_processes(&self) -> ProcessTable;
}
