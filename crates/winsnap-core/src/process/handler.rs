use sysinfo::{System, Users};
use tracing::{debug, info};

use super::types::{ProcessInfo, ProcessSource, ProcessTable};

/// Process source backed by `sysinfo`.
#[derive(Debug, Default)]
pub struct SysinfoProcessSource;

impl SysinfoProcessSource {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSource for SysinfoProcessSource {
    fn list_processes(&self) -> ProcessTable {
        info!(event = "core.process.list_started");

        let system = System::new_all();
        let users = Users::new_with_refreshed_list();

        let table: ProcessTable = system
            .processes()
            .iter()
            .map(|(pid, process)| {
                let owner = process
                    .user_id()
                    .and_then(|uid| users.get_user_by_id(uid))
                    .map(|user| user.name().to_string());
                if owner.is_none() {
                    debug!(event = "core.process.owner_unresolved", pid = pid.as_u32());
                }

                ProcessInfo {
                    pid: pid.as_u32(),
                    name: process.name().to_string_lossy().into_owned(),
                    owner,
                    command_line: process
                        .cmd()
                        .iter()
                        .map(|arg| arg.to_string_lossy().into_owned())
                        .collect(),
                }
            })
            .collect();

        info!(event = "core.process.list_completed", count = table.len());
        table
    }
}
