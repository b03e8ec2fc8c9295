use tracing::debug;

use super::types::{MatchOptions, MatchOutcome, MatchReport, MatchRule, WindowMatch};
use crate::window::WindowRecord;

/// Pair every live window with at most one stored record.
///
/// Stored records on desktop `-1` never match. Rules are tried strongest
/// first across all eligible stored records; within a rule the first stored
/// record in snapshot order wins. Several live windows may match the same
/// stored record.
pub fn match_windows<'a>(
    stored: &'a [WindowRecord],
    active: &'a [WindowRecord],
    options: &MatchOptions,
) -> MatchReport<'a> {
    let eligible: Vec<&WindowRecord> = stored.iter().filter(|s| s.is_on_desktop()).collect();

    let entries = active
        .iter()
        .map(|window| WindowMatch {
            active: window,
            outcome: match_window(window, &eligible, options),
        })
        .collect();

    MatchReport { entries }
}

fn match_window<'a>(
    active: &WindowRecord,
    eligible: &[&'a WindowRecord],
    options: &MatchOptions,
) -> MatchOutcome<'a> {
    if options.ignored_classes.contains(&active.class_name) {
        return MatchOutcome::Ignored;
    }

    for rule in MatchRule::ALL {
        if rule == MatchRule::Program && !options.program_fallback {
            continue;
        }
        if let Some(&stored) = eligible.iter().find(|s| rule_matches(rule, s, active)) {
            debug!(
                event = "core.reconcile.window_matched",
                active_id = %active.id,
                stored_id = %stored.id,
                rule = rule.as_str()
            );
            return MatchOutcome::Matched { stored, rule };
        }
    }

    debug!(
        event = "core.reconcile.window_unmatched",
        active_id = %active.id,
        class_name = %active.class_name,
        title = %active.title
    );
    MatchOutcome::Unmatched
}

fn rule_matches(rule: MatchRule, stored: &WindowRecord, active: &WindowRecord) -> bool {
    match rule {
        MatchRule::Exact => {
            active.process_id == stored.process_id && active.id == stored.id
        }
        MatchRule::Fuzzy => {
            let same_owner = same_command_line(active, stored)
                || active.process_id == stored.process_id
                || active.id == stored.id;
            let same_window =
                active.class_name == stored.class_name || active.title == stored.title;
            same_owner && same_window
        }
        MatchRule::Program => match (active.program(), stored.program()) {
            (Some(a), Some(s)) => a == s,
            _ => false,
        },
    }
}

/// Only a command line known on both sides counts.
fn same_command_line(a: &WindowRecord, b: &WindowRecord) -> bool {
    match (&a.command_line, &b.command_line) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
