use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info, warn};

use winsnap_core::config::{WinsnapConfig, config_file_path, load_config, load_config_from};
use winsnap_core::events;
use winsnap_core::ops::list_desktops;
use winsnap_core::process::SysinfoProcessSource;
use winsnap_core::wm::{WindowManagerBackend, WmError, WmctrlBackend};
use winsnap_core::{
    RestoreOptions, RestoreSummary, capture_snapshot, list_live_windows, load_snapshot,
    restore_snapshot, save_snapshot,
};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_cli_config(matches.get_one::<String>("config").map(Path::new))?;
    let backend = WmctrlBackend::from_config(&config.wm);
    if !backend.is_available() {
        warn!(
            event = "cli.backend_unavailable",
            backend = backend.name(),
            wmctrl = %config.wm.wmctrl,
            xprop = %config.wm.xprop
        );
    }

    let result = if let Some(path) = matches.get_one::<String>("save") {
        handle_save(&backend, Path::new(path))
    } else if let Some(path) = matches.get_one::<String>("load") {
        handle_load(&backend, &config, Path::new(path), matches)
    } else if matches.get_flag("list") {
        handle_list(&backend, matches)
    } else {
        error!(event = "cli.command_unknown");
        Err("Unknown command".into())
    };

    events::log_app_shutdown();
    result
}

fn load_cli_config(path: Option<&Path>) -> Result<WinsnapConfig, Box<dyn std::error::Error>> {
    let result = match path {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    result.map_err(|e| {
        eprintln!("Failed to load config: {}", e);
        error!(event = "cli.config_load_failed", error = %e);
        events::log_app_error(&e);
        e.into()
    })
}

fn handle_save(
    backend: &dyn WindowManagerBackend,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.save_started", path = %path.display());
    println!("Storing window layout in {}", path.display());

    let snapshot = match capture_snapshot(backend, &SysinfoProcessSource::new()) {
        Ok(snapshot) => snapshot,
        Err(e) => return Err(report_wm_error("capture window layout", "cli.save_failed", e)),
    };

    if let Err(e) = save_snapshot(path, &snapshot) {
        eprintln!("Failed to save snapshot: {}", e);
        error!(event = "cli.save_failed", error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    println!(
        "Saved {} window(s) and {} desktop(s)",
        snapshot.windows.len(),
        snapshot.desktops.len()
    );
    info!(
        event = "cli.save_completed",
        path = %path.display(),
        windows = snapshot.windows.len()
    );
    Ok(())
}

fn handle_load(
    backend: &dyn WindowManagerBackend,
    config: &WinsnapConfig,
    path: &Path,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let multi_monitor = matches.get_flag("multi");
    let dry_run = matches.get_flag("dry-run");
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.load_started",
        path = %path.display(),
        multi_monitor = multi_monitor,
        dry_run = dry_run
    );

    let snapshot = match load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Failed to load snapshot: {}", e);
            error!(event = "cli.load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if !json_output {
        println!("Loading window layout from {}", path.display());
    }

    let options = RestoreOptions::from_config(&config.restore, multi_monitor, dry_run);
    let summary = match restore_snapshot(&snapshot, backend, &SysinfoProcessSource::new(), &options)
    {
        Ok(summary) => summary,
        Err(e) => return Err(report_wm_error("read live windows", "cli.load_failed", e)),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_restore_summary(&summary);
    }

    info!(
        event = "cli.load_completed",
        applied = summary.applied,
        relocated = summary.relocated,
        failed = summary.failed.len()
    );

    if summary.has_failures() {
        return Err(format!("{} window(s) could not be restored", summary.failed.len()).into());
    }
    Ok(())
}

fn handle_list(
    backend: &dyn WindowManagerBackend,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    if matches.get_flag("desktops") {
        info!(event = "cli.list_desktops_started", json_output = json_output);
        let desktops = match list_desktops(backend) {
            Ok(desktops) => desktops,
            Err(e) => return Err(report_wm_error("list desktops", "cli.list_desktops_failed", e)),
        };

        if json_output {
            println!("{}", serde_json::to_string_pretty(&desktops)?);
        } else if desktops.is_empty() {
            println!("No desktops found.");
        } else {
            println!("Desktops:");
            table::print_desktops_table(&desktops);
        }
        info!(event = "cli.list_desktops_completed", count = desktops.len());
        return Ok(());
    }

    info!(event = "cli.list_windows_started", json_output = json_output);
    let windows = match list_live_windows(backend, &SysinfoProcessSource::new()) {
        Ok(windows) => windows,
        Err(e) => return Err(report_wm_error("list windows", "cli.list_windows_failed", e)),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else if windows.is_empty() {
        println!("No windows found.");
    } else {
        println!("Windows:");
        table::print_windows_table(&windows);
    }
    info!(event = "cli.list_windows_completed", count = windows.len());
    Ok(())
}

fn print_restore_summary(summary: &RestoreSummary) {
    if summary.dry_run {
        println!("Dry run, planned changes:");
        table::print_instructions_table(&summary.instructions);
    }

    println!(
        "Matched: {}  Unmatched: {}  Ignored: {}",
        summary.matched, summary.unmatched, summary.ignored
    );
    if !summary.dry_run {
        println!(
            "Restored: {}  Relocated: {}  Failed: {}",
            summary.applied,
            summary.relocated,
            summary.failed.len()
        );
    }
    for failed in &summary.failed {
        eprintln!("  {}: {}", failed.window_id, failed.error);
    }
}

fn report_wm_error(action: &str, event: &'static str, e: WmError) -> Box<dyn std::error::Error> {
    eprintln!("Failed to {}: {}", action, e);
    if let WmError::ToolNotFound { tool } = &e {
        eprintln!(
            "Install {} or point [wm] in {} at it.",
            tool,
            config_file_path().display()
        );
    }
    error!(event = event, error = %e);
    events::log_app_error(&e);
    e.into()
}
