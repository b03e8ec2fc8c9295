use tracing::{info, warn};

use super::capture::list_live_windows;
use super::types::{FailedWindow, RestoreOptions, RestoreSummary};
use crate::process::ProcessSource;
use crate::reconcile::{ApplyStep, Instruction, match_windows, plan_restore};
use crate::snapshot::Snapshot;
use crate::wm::{WindowManagerBackend, WmError};

/// Put live windows back where `snapshot` recorded them.
///
/// Only the live listing can fail the run. Each instruction is attempted
/// once; a failing window is recorded in the summary and the rest carry on.
pub fn restore_snapshot(
    snapshot: &Snapshot,
    wm: &dyn WindowManagerBackend,
    procs: &dyn ProcessSource,
    options: &RestoreOptions,
) -> Result<RestoreSummary, WmError> {
    info!(
        event = "core.restore.started",
        stored = snapshot.windows.len(),
        multi_monitor = options.plan.multi_monitor,
        dry_run = options.dry_run
    );

    let active = list_live_windows(wm, procs)?;
    let report = match_windows(&snapshot.windows, &active, &options.matching);
    let instructions = plan_restore(&report, &options.plan);

    let mut summary = RestoreSummary {
        matched: report.matched().count(),
        unmatched: report.unmatched().count(),
        ignored: report.ignored().count(),
        dry_run: options.dry_run,
        ..RestoreSummary::default()
    };

    for entry in report.unmatched() {
        info!(
            event = "core.restore.window_unmatched",
            window_id = %entry.active.id,
            class_name = %entry.active.class_name,
            title = %entry.active.title
        );
    }

    if !options.dry_run {
        for instruction in &instructions {
            match apply_instruction(wm, instruction) {
                Ok(()) if instruction.is_relocate() => summary.relocated += 1,
                Ok(()) => summary.applied += 1,
                Err(e) => summary.failed.push(FailedWindow {
                    window_id: instruction.window_id.clone(),
                    error: e.to_string(),
                }),
            }
        }
    }
    summary.instructions = instructions;

    info!(
        event = "core.restore.completed",
        matched = summary.matched,
        unmatched = summary.unmatched,
        ignored = summary.ignored,
        applied = summary.applied,
        relocated = summary.relocated,
        failed = summary.failed.len()
    );
    Ok(summary)
}

/// Run every step of one instruction in order.
///
/// Later steps still run after a failure so a window is never left with
/// its maximize flags cleared; the first error is returned.
pub fn apply_instruction(
    wm: &dyn WindowManagerBackend,
    instruction: &Instruction,
) -> Result<(), WmError> {
    let window_id = instruction.window_id.as_str();
    let mut first_error = None;

    for step in &instruction.steps {
        let result = match step {
            ApplyStep::ClearFlags { flags } | ApplyStep::SetFlags { flags } => {
                wm.set_state_flags(window_id, flags)
            }
            ApplyStep::ApplyGeometry { rect } => wm.apply_geometry(window_id, rect),
        };

        if let Err(e) = result {
            warn!(
                event = "core.restore.step_failed",
                window_id = window_id,
                step = ?step,
                error = %e
            );
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => {
            info!(
                event = "core.restore.window_applied",
                window_id = window_id,
                title = %instruction.title,
                kind = ?instruction.kind
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::{Call, FakeProcesses, FakeWm, flags, process};
    use crate::reconcile::{MatchOptions, PlanOptions};
    use crate::window::{Position, Rect, Size, WindowRecord};

    fn stored(id: &str, pid: u32, class_name: &str, rect: Rect) -> WindowRecord {
        WindowRecord {
            id: id.to_string(),
            desktop: 1,
            process_id: pid,
            position: Position {
                left: rect.left,
                top: rect.top,
            },
            size: Size {
                width: rect.width,
                height: rect.height,
            },
            class_name: class_name.to_string(),
            owner_name: "devbox".to_string(),
            title: String::new(),
            command_line: None,
            state_flags: None,
        }
    }

    const LIVE: &str = "\
0x9  1 5   100 100 400 300 Firefox  devbox Mozilla Firefox
0x10 1 77  50  60  200 100 xterm.XTerm  devbox shell
0x11 -1 12 0   0   1920 28 xfce4-panel.Xfce4-panel  devbox panel
";

    fn options(multi: bool, dry_run: bool) -> RestoreOptions {
        RestoreOptions {
            matching: MatchOptions {
                ignored_classes: vec!["xfce4-panel.Xfce4-panel".to_string()],
                program_fallback: true,
            },
            plan: PlanOptions {
                multi_monitor: multi,
                primary_width: 1920,
            },
            dry_run,
        }
    }

    #[test]
    fn test_restore_reapplies_stored_geometry_to_live_handle() {
        let wm = FakeWm::new(LIVE, "");
        let procs = FakeProcesses(vec![process(5, &["firefox"])]);
        let snapshot = Snapshot::new(
            vec![stored("0x1", 5, "Firefox", Rect::new(0, 0, 800, 600))],
            vec![],
        );

        let summary = restore_snapshot(&snapshot, &wm, &procs, &options(false, false)).unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.unmatched, 1);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.applied, 1);
        assert_eq!(summary.relocated, 0);
        assert!(!summary.has_failures());
        assert_eq!(
            wm.calls(),
            vec![Call::Geometry("0x9".to_string(), Rect::new(0, 0, 800, 600))]
        );
    }

    #[test]
    fn test_restore_multi_relocates_unmatched() {
        let wm = FakeWm::new(LIVE, "");
        let procs = FakeProcesses(vec![]);
        let snapshot = Snapshot::new(
            vec![stored("0x1", 5, "Firefox", Rect::new(0, 0, 800, 600))],
            vec![],
        );

        let summary = restore_snapshot(&snapshot, &wm, &procs, &options(true, false)).unwrap();

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.relocated, 1);
        assert_eq!(
            wm.calls(),
            vec![
                Call::Geometry("0x9".to_string(), Rect::new(0, 0, 800, 600)),
                Call::Geometry("0x10".to_string(), Rect::new(1970, 60, 200, 100)),
            ]
        );
    }

    #[test]
    fn test_restore_maximized_order() {
        let wm = FakeWm::new(LIVE, "");
        let procs = FakeProcesses(vec![]);
        let record = stored("0x1", 5, "Firefox", Rect::new(0, 0, 800, 600))
            .with_state_flags(flags(&["MAXIMIZED_HORZ"]));
        let snapshot = Snapshot::new(vec![record], vec![]);

        restore_snapshot(&snapshot, &wm, &procs, &options(false, false)).unwrap();

        assert_eq!(
            wm.calls(),
            vec![
                Call::Flags("0x9".to_string(), flags(&[])),
                Call::Geometry("0x9".to_string(), Rect::new(0, 0, 800, 600)),
                Call::Flags("0x9".to_string(), flags(&["MAXIMIZED_HORZ"])),
            ]
        );
    }

    #[test]
    fn test_restore_continues_after_failure() {
        let mut wm = FakeWm::new(LIVE, "");
        wm.broken.insert("0x9".to_string());
        let procs = FakeProcesses(vec![]);
        let snapshot = Snapshot::new(
            vec![
                stored("0x1", 5, "Firefox", Rect::new(0, 0, 800, 600)),
                stored("0x10", 77, "xterm.XTerm", Rect::new(5, 5, 300, 300)),
            ],
            vec![],
        );

        let summary = restore_snapshot(&snapshot, &wm, &procs, &options(false, false)).unwrap();

        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].window_id, "0x9");
        assert_eq!(summary.applied, 1);
        assert_eq!(
            wm.calls(),
            vec![Call::Geometry("0x10".to_string(), Rect::new(5, 5, 300, 300))]
        );
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let wm = FakeWm::new(LIVE, "");
        let procs = FakeProcesses(vec![]);
        let snapshot = Snapshot::new(
            vec![stored("0x1", 5, "Firefox", Rect::new(0, 0, 800, 600))],
            vec![],
        );

        let summary = restore_snapshot(&snapshot, &wm, &procs, &options(true, true)).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.instructions.len(), 2);
        assert_eq!(summary.applied, 0);
        assert!(wm.calls().is_empty());
    }

    #[test]
    fn test_off_desktop_stored_records_ignored() {
        let wm = FakeWm::new(LIVE, "");
        let procs = FakeProcesses(vec![]);
        let mut record = stored("0x9", 5, "Firefox", Rect::new(0, 0, 800, 600));
        record.desktop = -1;
        let snapshot = Snapshot::new(vec![record], vec![]);

        let summary = restore_snapshot(&snapshot, &wm, &procs, &options(false, false)).unwrap();

        assert_eq!(summary.matched, 0);
        assert!(wm.calls().is_empty());
    }

    #[test]
    fn test_apply_instruction_reports_failure() {
        let mut wm = FakeWm::new("", "");
        wm.broken.insert("0x1".to_string());
        let instruction = Instruction {
            window_id: "0x1".to_string(),
            title: String::new(),
            kind: crate::reconcile::InstructionKind::Relocate,
            steps: vec![ApplyStep::ApplyGeometry {
                rect: Rect::new(0, 0, 1, 1),
            }],
        };
        assert!(apply_instruction(&wm, &instruction).is_err());
    }
}
