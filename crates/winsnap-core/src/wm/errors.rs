use crate::errors::WinsnapError;

#[derive(Debug, thiserror::Error)]
pub enum WmError {
    #[error("Window manager tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    #[error("Command '{command}' produced no output")]
    EmptyOutput { command: String },

    #[error("IO error running window manager command: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl WinsnapError for WmError {
    fn error_code(&self) -> &'static str {
        match self {
            WmError::ToolNotFound { .. } => "WM_TOOL_NOT_FOUND",
            WmError::CommandFailed { .. } => "WM_COMMAND_FAILED",
            WmError::EmptyOutput { .. } => "WM_EMPTY_OUTPUT",
            WmError::IoError { .. } => "WM_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WmError::ToolNotFound { .. })
    }
}
