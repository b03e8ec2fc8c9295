use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Horizontal offset used to push unmatched windows onto the second monitor.
pub const DEFAULT_PRIMARY_WIDTH: u32 = 1920;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WinsnapConfig {
    pub restore: RestoreConfig,
    pub wm: WmConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RestoreConfig {
    /// Width of the primary monitor, in pixels.
    pub primary_width: u32,
    /// Window classes never touched on restore (panels, desktop).
    pub ignored_classes: Vec<String>,
    /// Allow matching on the program path alone as a last resort.
    pub program_fallback: bool,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            primary_width: DEFAULT_PRIMARY_WIDTH,
            ignored_classes: vec![
                "xfce4-panel.Xfce4-panel".to_string(),
                "xfdesktop.Xfdesktop".to_string(),
            ],
            program_fallback: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WmConfig {
    pub wmctrl: String,
    pub xprop: String,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            wmctrl: "wmctrl".to_string(),
            xprop: "xprop".to_string(),
        }
    }
}

impl WinsnapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restore.primary_width == 0 || self.restore.primary_width > i32::MAX as u32 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "restore.primary_width must be between 1 and {}, got {}",
                    i32::MAX,
                    self.restore.primary_width
                ),
            });
        }
        for (key, value) in [("wm.wmctrl", &self.wm.wmctrl), ("wm.xprop", &self.wm.xprop)] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidConfiguration {
                    message: format!("{} must not be empty", key),
                });
            }
        }
        Ok(())
    }
}
