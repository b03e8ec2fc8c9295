use tracing::{debug, info, warn};

use crate::process::ProcessSource;
use crate::snapshot::Snapshot;
use crate::window::{DesktopRecord, WindowRecord, parse_desktop_listing, parse_window_listing};
use crate::wm::{WindowManagerBackend, WmError};

/// List live windows, enriched with their owner's command line and state.
///
/// A window whose process is gone by the time the process table is read
/// keeps only the listing fields. A failed state query leaves the state
/// unknown.
pub fn list_live_windows(
    wm: &dyn WindowManagerBackend,
    procs: &dyn ProcessSource,
) -> Result<Vec<WindowRecord>, WmError> {
    info!(event = "core.window.list_started", backend = wm.name());

    let processes = procs.list_processes();
    let raw = wm.list_windows()?;

    let windows: Vec<WindowRecord> = parse_window_listing(&raw)
        .into_iter()
        .map(|window| {
            let Some(process) = processes.lookup(window.process_id) else {
                debug!(
                    event = "core.window.process_lookup_failed",
                    window_id = %window.id,
                    pid = window.process_id
                );
                return window;
            };

            let command_line = process.command_line.clone();
            let state_flags = match wm.window_state(&window.id) {
                Ok(flags) => Some(flags),
                Err(e) => {
                    warn!(
                        event = "core.window.state_query_failed",
                        window_id = %window.id,
                        error = %e
                    );
                    None
                }
            };

            WindowRecord {
                command_line: Some(command_line),
                state_flags,
                ..window
            }
        })
        .collect();

    info!(event = "core.window.list_completed", count = windows.len());
    Ok(windows)
}

pub fn list_desktops(wm: &dyn WindowManagerBackend) -> Result<Vec<DesktopRecord>, WmError> {
    info!(event = "core.desktop.list_started", backend = wm.name());
    let desktops = parse_desktop_listing(&wm.list_desktops()?);
    info!(event = "core.desktop.list_completed", count = desktops.len());
    Ok(desktops)
}

/// Capture the current windows and desktops.
pub fn capture_snapshot(
    wm: &dyn WindowManagerBackend,
    procs: &dyn ProcessSource,
) -> Result<Snapshot, WmError> {
    info!(event = "core.snapshot.capture_started");

    let windows = list_live_windows(wm, procs)?;
    let desktops = list_desktops(wm)?;
    let snapshot = Snapshot::new(windows, desktops);

    info!(
        event = "core.snapshot.capture_completed",
        windows = snapshot.windows.len(),
        desktops = snapshot.desktops.len()
    );
    Ok(snapshot)
}
