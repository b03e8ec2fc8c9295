use std::collections::BTreeSet;

use tracing::debug;

use super::types::{
    ApplyStep, Instruction, InstructionKind, MatchOutcome, MatchReport, PlanOptions, WindowMatch,
};
use crate::window::{MAXIMIZED_HORZ, MAXIMIZED_VERT, WindowRecord};

/// Turn match decisions into window manager instructions.
///
/// Matched windows get the stored geometry applied to their live handle.
/// Unmatched windows are relocated only in multi-monitor mode, and only
/// while they still sit on the primary monitor.
pub fn plan_restore(report: &MatchReport<'_>, options: &PlanOptions) -> Vec<Instruction> {
    report
        .entries
        .iter()
        .filter_map(|entry| plan_window(entry, options))
        .collect()
}

fn plan_window(entry: &WindowMatch<'_>, options: &PlanOptions) -> Option<Instruction> {
    let active = entry.active;
    match entry.outcome {
        MatchOutcome::Matched { stored, rule } => Some(Instruction {
            window_id: active.id.clone(),
            title: active.title.clone(),
            kind: InstructionKind::Reapply {
                rule,
                stored_id: stored.id.clone(),
            },
            steps: reapply_steps(stored),
        }),
        MatchOutcome::Unmatched if options.multi_monitor => relocate(active, options),
        MatchOutcome::Unmatched | MatchOutcome::Ignored => None,
    }
}

/// Window managers refuse to move a maximized window, so maximize flags are
/// dropped around the geometry change and put back afterwards.
fn reapply_steps(stored: &WindowRecord) -> Vec<ApplyStep> {
    let geometry = ApplyStep::ApplyGeometry {
        rect: stored.rect(),
    };

    match &stored.state_flags {
        Some(flags) if stored.is_maximized() => {
            let cleared: BTreeSet<String> = flags
                .iter()
                .filter(|f| f.as_str() != MAXIMIZED_HORZ && f.as_str() != MAXIMIZED_VERT)
                .cloned()
                .collect();
            vec![
                ApplyStep::ClearFlags { flags: cleared },
                geometry,
                ApplyStep::SetFlags {
                    flags: flags.clone(),
                },
            ]
        }
        _ => vec![geometry],
    }
}

fn relocate(active: &WindowRecord, options: &PlanOptions) -> Option<Instruction> {
    let offset = i32::try_from(options.primary_width).unwrap_or(i32::MAX);
    if active.position.left >= offset {
        debug!(
            event = "core.reconcile.relocate_skipped",
            window_id = %active.id,
            left = active.position.left
        );
        return None;
    }

    Some(Instruction {
        window_id: active.id.clone(),
        title: active.title.clone(),
        kind: InstructionKind::Relocate,
        steps: vec![ApplyStep::ApplyGeometry {
            rect: active.rect().shifted_right(offset),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::{MatchOptions, MatchRule, match_windows};
    use crate::window::{Position, Rect, Size};

    fn window(id: &str, pid: u32, left: i32, top: i32, width: u32, height: u32) -> WindowRecord {
        WindowRecord {
            id: id.to_string(),
            desktop: 1,
            process_id: pid,
            position: Position { left, top },
            size: Size { width, height },
            class_name: "Firefox".to_string(),
            owner_name: "devbox".to_string(),
            title: String::new(),
            command_line: None,
            state_flags: None,
        }
    }

    fn flags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn multi() -> PlanOptions {
        PlanOptions {
            multi_monitor: true,
            primary_width: 1920,
        }
    }

    #[test]
    fn test_reapply_uses_stored_rect_and_live_handle() {
        let stored = vec![window("0x1", 5, 0, 0, 800, 600)];
        let mut live = window("0x9", 5, 100, 100, 400, 300);
        live.title = "Mozilla Firefox".to_string();
        let active = vec![live];

        let report = match_windows(&stored, &active, &MatchOptions::default());
        let plan = plan_restore(&report, &PlanOptions::default());

        assert_eq!(
            plan,
            vec![Instruction {
                window_id: "0x9".to_string(),
                title: "Mozilla Firefox".to_string(),
                kind: InstructionKind::Reapply {
                    rule: MatchRule::Fuzzy,
                    stored_id: "0x1".to_string(),
                },
                steps: vec![ApplyStep::ApplyGeometry {
                    rect: Rect::new(0, 0, 800, 600)
                }],
            }]
        );
    }

    #[test]
    fn test_exact_match_keeps_geometry() {
        let stored = vec![window("0x1", 5, -1280, -20, 1270, 1000)];
        let active = vec![window("0x1", 5, 0, 0, 10, 10)];
        let report = match_windows(&stored, &active, &MatchOptions::default());
        let plan = plan_restore(&report, &PlanOptions::default());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].geometry(), Some(stored[0].rect()));
    }

    #[test]
    fn test_maximized_sequence() {
        let stored = vec![
            window("0x1", 5, 0, 0, 800, 600).with_state_flags(flags(&["MAXIMIZED_HORZ", "FOCUSED"])),
        ];
        let active = vec![window("0x1", 5, 0, 0, 10, 10)];
        let report = match_windows(&stored, &active, &MatchOptions::default());
        let plan = plan_restore(&report, &PlanOptions::default());

        assert_eq!(
            plan[0].steps,
            vec![
                ApplyStep::ClearFlags {
                    flags: flags(&["FOCUSED"])
                },
                ApplyStep::ApplyGeometry {
                    rect: Rect::new(0, 0, 800, 600)
                },
                ApplyStep::SetFlags {
                    flags: flags(&["MAXIMIZED_HORZ", "FOCUSED"])
                },
            ]
        );
    }

    #[test]
    fn test_non_maximized_flags_single_step() {
        let stored = vec![window("0x1", 5, 0, 0, 800, 600).with_state_flags(flags(&["STICKY"]))];
        let active = vec![window("0x1", 5, 0, 0, 10, 10)];
        let report = match_windows(&stored, &active, &MatchOptions::default());
        let plan = plan_restore(&report, &PlanOptions::default());
        assert_eq!(plan[0].steps.len(), 1);
    }

    #[test]
    fn test_relocate_unmatched_on_primary() {
        let active = vec![window("0x2", 9, 100, 40, 500, 400)];
        let report = match_windows(&[], &active, &MatchOptions::default());
        let plan = plan_restore(&report, &multi());

        assert_eq!(plan.len(), 1);
        assert!(plan[0].is_relocate());
        assert_eq!(plan[0].window_id, "0x2");
        assert_eq!(plan[0].geometry(), Some(Rect::new(2020, 40, 500, 400)));
    }

    #[test]
    fn test_relocate_boundary() {
        let active = vec![
            window("0x2", 9, 1919, 0, 10, 10),
            window("0x3", 9, 1920, 0, 10, 10),
            window("0x4", 9, 3000, 0, 10, 10),
        ];
        let report = match_windows(&[], &active, &MatchOptions::default());
        let plan = plan_restore(&report, &multi());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].window_id, "0x2");
        assert_eq!(plan[0].geometry().map(|r| r.left), Some(3839));
    }

    #[test]
    fn test_single_monitor_leaves_unmatched_alone() {
        let active = vec![window("0x2", 9, 100, 40, 500, 400)];
        let report = match_windows(&[], &active, &MatchOptions::default());
        assert!(plan_restore(&report, &PlanOptions::default()).is_empty());
    }

    #[test]
    fn test_off_desktop_stored_never_reapplied() {
        let mut sticky = window("0x1", 5, 0, 0, 800, 600);
        sticky.desktop = -1;
        let stored = vec![sticky];
        let active = vec![window("0x1", 5, 50, 50, 10, 10)];
        let report = match_windows(&stored, &active, &MatchOptions::default());
        let plan = plan_restore(&report, &multi());
        assert!(plan.iter().all(|i| i.is_relocate()));
    }

    #[test]
    fn test_ignored_windows_not_relocated() {
        let mut panel = window("0x1", 5, 0, 0, 1920, 28);
        panel.class_name = "xfce4-panel.Xfce4-panel".to_string();
        let active = vec![panel];
        let options = MatchOptions {
            ignored_classes: vec!["xfce4-panel.Xfce4-panel".to_string()],
            ..MatchOptions::default()
        };
        let report = match_windows(&[], &active, &options);
        assert!(plan_restore(&report, &multi()).is_empty());
    }

    #[test]
    fn test_custom_primary_width() {
        let active = vec![window("0x2", 9, 2000, 0, 10, 10)];
        let report = match_windows(&[], &active, &MatchOptions::default());
        let plan = plan_restore(
            &report,
            &PlanOptions {
                multi_monitor: true,
                primary_width: 2560,
            },
        );
        assert_eq!(plan[0].geometry().map(|r| r.left), Some(4560));
    }

    #[test]
    fn test_plan_is_repeatable() {
        let stored = vec![window("0x1", 5, 0, 0, 800, 600)];
        let active = vec![window("0x1", 5, 1, 1, 1, 1), window("0x2", 6, 0, 0, 5, 5)];
        let report = match_windows(&stored, &active, &MatchOptions::default());
        assert_eq!(plan_restore(&report, &multi()), plan_restore(&report, &multi()));
    }
}
