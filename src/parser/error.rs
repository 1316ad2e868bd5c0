//! Parse failures

use thiserror::Error;

use crate::domain::FieldError;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// Failure to turn user input into a value or a command
///
/// `NullArgument` signals a caller bug (a value was required but none was
/// passed). `Invalid` is the user-facing case and always carries a message
/// ready for display: either a field's constraint text or a command's usage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{field} must not be null")]
    NullArgument { field: &'static str },

    #[error("{0}")]
    Invalid(String),
}

impl ParseError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ParseError::Invalid(message.into())
    }

    /// Builds the "Invalid command format!" error for a command's usage text
    pub fn usage(usage: &str) -> Self {
        ParseError::Invalid(format!("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, usage))
    }
}

impl From<FieldError> for ParseError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::Null { field } => ParseError::NullArgument { field },
            FieldError::Illegal(message) => ParseError::Invalid(message.to_string()),
        }
    }
}
