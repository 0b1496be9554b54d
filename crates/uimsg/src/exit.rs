use std::io;

use uimsg_schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

/// A failed subcommand and the exit code `main` terminates with.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match err {
        SchemaError::UnknownMessageType(_) => USAGE,
        SchemaError::PayloadShapeMismatch { .. }
        | SchemaError::InvalidJson(_)
        | SchemaError::EnvelopeTooLarge { .. }
        | SchemaError::UnexpectedEvent(_) => DATA_INVALID,
        SchemaError::CompileFailed(_) | SchemaError::NoPayload(_) => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}
