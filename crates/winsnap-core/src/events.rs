//! Application lifecycle events shared by the CLI.

use tracing::{error, info, warn};

use crate::errors::WinsnapError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log an application error with its code.
///
/// User errors (bad input, missing files) are logged at warn level,
/// everything else at error level.
pub fn log_app_error<E: WinsnapError + ?Sized>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = false
        );
    }
}
