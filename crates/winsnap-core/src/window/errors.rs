use crate::errors::WinsnapError;

/// A line of window-manager output that does not fit the expected grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Line does not match the {kind} listing format: '{line}'")]
    GrammarMismatch { kind: &'static str, line: String },

    #[error("Invalid {field} value '{value}' in line: '{line}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
        line: String,
    },
}

impl WinsnapError for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            ParseError::GrammarMismatch { .. } => "PARSE_GRAMMAR_MISMATCH",
            ParseError::InvalidNumber { .. } => "PARSE_INVALID_NUMBER",
        }
    }
}
