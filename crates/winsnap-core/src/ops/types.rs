use serde::Serialize;

use crate::config::RestoreConfig;
use crate::reconcile::{Instruction, MatchOptions, PlanOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    pub matching: MatchOptions,
    pub plan: PlanOptions,
    /// Plan only; don't touch any window.
    pub dry_run: bool,
}

impl RestoreOptions {
    pub fn from_config(config: &RestoreConfig, multi_monitor: bool, dry_run: bool) -> Self {
        Self {
            matching: MatchOptions::from(config),
            plan: PlanOptions {
                multi_monitor,
                primary_width: config.primary_width,
            },
            dry_run,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedWindow {
    pub window_id: String,
    pub error: String,
}

/// What a restore run decided and did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestoreSummary {
    pub matched: usize,
    pub unmatched: usize,
    pub ignored: usize,
    /// Reapply instructions that completed
    pub applied: usize,
    /// Relocate instructions that completed
    pub relocated: usize,
    pub failed: Vec<FailedWindow>,
    pub dry_run: bool,
    pub instructions: Vec<Instruction>,
}

impl RestoreSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
