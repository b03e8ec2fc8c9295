use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::{DEFAULT_PRIMARY_WIDTH, RestoreConfig};
use crate::window::{Rect, WindowRecord};

/// Which rule paired a live window with a stored record, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Same pid and same window handle.
    Exact,
    /// Same command line, pid or handle, plus same class or title.
    Fuzzy,
    /// Same program path (first command-line token).
    Program,
}

impl MatchRule {
    pub const ALL: [MatchRule; 3] = [MatchRule::Exact, MatchRule::Fuzzy, MatchRule::Program];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::Exact => "exact",
            MatchRule::Fuzzy => "fuzzy",
            MatchRule::Program => "program",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    Matched {
        stored: &'a WindowRecord,
        rule: MatchRule,
    },
    Unmatched,
    /// Class is on the ignore list; never touched.
    Ignored,
}

impl<'a> MatchOutcome<'a> {
    pub fn stored(&self) -> Option<&'a WindowRecord> {
        match self {
            MatchOutcome::Matched { stored, .. } => Some(*stored),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMatch<'a> {
    pub active: &'a WindowRecord,
    pub outcome: MatchOutcome<'a>,
}

/// Match decision for every live window, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport<'a> {
    pub entries: Vec<WindowMatch<'a>>,
}

impl<'a> MatchReport<'a> {
    /// Decision for the live window with handle `active_id`.
    pub fn get(&self, active_id: &str) -> Option<&MatchOutcome<'a>> {
        self.entries
            .iter()
            .find(|entry| entry.active.id == active_id)
            .map(|entry| &entry.outcome)
    }

    pub fn matched(&self) -> impl Iterator<Item = &WindowMatch<'a>> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, MatchOutcome::Matched { .. }))
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &WindowMatch<'a>> {
        self.entries
            .iter()
            .filter(|e| e.outcome == MatchOutcome::Unmatched)
    }

    pub fn ignored(&self) -> impl Iterator<Item = &WindowMatch<'a>> {
        self.entries
            .iter()
            .filter(|e| e.outcome == MatchOutcome::Ignored)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    pub ignored_classes: Vec<String>,
    pub program_fallback: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            ignored_classes: Vec::new(),
            program_fallback: true,
        }
    }
}

impl From<&RestoreConfig> for MatchOptions {
    fn from(config: &RestoreConfig) -> Self {
        Self {
            ignored_classes: config.ignored_classes.clone(),
            program_fallback: config.program_fallback,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Push unmatched windows onto the second monitor.
    pub multi_monitor: bool,
    pub primary_width: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            multi_monitor: false,
            primary_width: DEFAULT_PRIMARY_WIDTH,
        }
    }
}

/// One window manager call. Steps of an instruction run in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ApplyStep {
    ClearFlags { flags: BTreeSet<String> },
    ApplyGeometry { rect: Rect },
    SetFlags { flags: BTreeSet<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstructionKind {
    /// Put a matched window back where the stored record had it.
    Reapply { rule: MatchRule, stored_id: String },
    /// Move an unmatched window past the primary monitor.
    Relocate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Live handle of the window to change
    pub window_id: String,
    pub title: String,
    pub kind: InstructionKind,
    pub steps: Vec<ApplyStep>,
}

impl Instruction {
    pub fn is_relocate(&self) -> bool {
        self.kind == InstructionKind::Relocate
    }

    /// Target rectangle of the geometry step.
    pub fn geometry(&self) -> Option<Rect> {
        self.steps.iter().find_map(|step| match step {
            ApplyStep::ApplyGeometry { rect } => Some(*rect),
            _ => None,
        })
    }
}
