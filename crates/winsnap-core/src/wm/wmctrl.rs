//! `wmctrl` + `xprop` backend implementation.

use std::collections::BTreeSet;
use std::process::Command;

use tracing::{debug, warn};

use crate::config::WmConfig;
use crate::window::{Rect, parse_state_flags};
use crate::wm::errors::WmError;
use crate::wm::traits::WindowManagerBackend;

const STATE_PROPERTY: &str = "_NET_WM_STATE";
const STATE_ATOM_PREFIX: &str = "_NET_WM_STATE_";

/// Backend that shells out to `wmctrl` for listing and geometry, and to
/// `xprop` for EWMH state flags.
#[derive(Debug, Clone)]
pub struct WmctrlBackend {
    wmctrl: String,
    xprop: String,
}

impl Default for WmctrlBackend {
    fn default() -> Self {
        Self::from_config(&WmConfig::default())
    }
}

impl WmctrlBackend {
    pub fn from_config(config: &WmConfig) -> Self {
        Self {
            wmctrl: config.wmctrl.clone(),
            xprop: config.xprop.clone(),
        }
    }

    fn run(&self, program: &str, args: &[String]) -> Result<String, WmError> {
        let command = render_command(program, args);
        debug!(event = "core.wm.command_started", command = %command);

        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WmError::ToolNotFound {
                    tool: program.to_string(),
                }
            } else {
                WmError::IoError { source: e }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "core.wm.command_failed",
                command = %command,
                status = %output.status,
                stderr = %stderr
            );
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(WmError::CommandFailed { command, message });
        }

        debug!(event = "core.wm.command_completed", command = %command);
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn query(&self, program: &str, args: &[String]) -> Result<String, WmError> {
        let stdout = self.run(program, args)?;
        if stdout.trim().is_empty() {
            return Err(WmError::EmptyOutput {
                command: render_command(program, args),
            });
        }
        Ok(stdout)
    }
}

impl WindowManagerBackend for WmctrlBackend {
    fn name(&self) -> &'static str {
        "wmctrl"
    }

    fn is_available(&self) -> bool {
        which::which(&self.wmctrl).is_ok() && which::which(&self.xprop).is_ok()
    }

    fn list_windows(&self) -> Result<String, WmError> {
        self.query(&self.wmctrl, &["-lGpx".to_string()])
    }

    fn list_desktops(&self) -> Result<String, WmError> {
        self.query(&self.wmctrl, &["-d".to_string()])
    }

    fn window_state(&self, window_id: &str) -> Result<BTreeSet<String>, WmError> {
        let args = vec![
            "-id".to_string(),
            window_id.to_string(),
            STATE_PROPERTY.to_string(),
        ];
        let stdout = self.query(&self.xprop, &args)?;
        Ok(parse_state_flags(&stdout))
    }

    fn apply_geometry(&self, window_id: &str, rect: &Rect) -> Result<(), WmError> {
        self.run(&self.wmctrl, &geometry_args(window_id, rect))?;
        Ok(())
    }

    fn set_state_flags(&self, window_id: &str, flags: &BTreeSet<String>) -> Result<(), WmError> {
        self.run(&self.xprop, &state_args(window_id, flags))?;
        Ok(())
    }
}

/// `wmctrl -ir <id> -e 0,<left>,<top>,<width>,<height>`
///
/// Gravity 0 keeps the window's own gravity.
fn geometry_args(window_id: &str, rect: &Rect) -> Vec<String> {
    vec![
        "-ir".to_string(),
        window_id.to_string(),
        "-e".to_string(),
        format!("0,{},{},{},{}", rect.left, rect.top, rect.width, rect.height),
    ]
}

/// `xprop -id <id> -f _NET_WM_STATE 32a -set _NET_WM_STATE <atoms>`
fn state_args(window_id: &str, flags: &BTreeSet<String>) -> Vec<String> {
    let atoms = flags
        .iter()
        .map(|flag| format!("{}{}", STATE_ATOM_PREFIX, flag))
        .collect::<Vec<_>>()
        .join(",");
    vec![
        "-id".to_string(),
        window_id.to_string(),
        "-f".to_string(),
        STATE_PROPERTY.to_string(),
        "32a".to_string(),
        "-set".to_string(),
        STATE_PROPERTY.to_string(),
        atoms,
    ]
}

fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
