//! Reconciles stored window records against the live window list.
//!
//! Both halves are pure: [`match_windows`] pairs live windows with stored
//! records, [`plan_restore`] turns the pairing into window manager
//! instructions. Nothing here talks to the window manager.

mod matcher;
mod planner;
mod types;

pub use matcher::match_windows;
pub use planner::plan_restore;
pub use types::{
    ApplyStep, Instruction, InstructionKind, MatchOptions, MatchOutcome, MatchReport, MatchRule,
    PlanOptions, WindowMatch,
};
