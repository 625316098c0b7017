//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Argument-shape errors never reach this mapping, clap reports those
    /// itself; invalid task or model content counts as usage here.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::App(e) => match e {
                ApplicationError::Domain(DomainError::MalformedLine { .. }) => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Domain(_) => crate::exitcode::USAGE,
                ApplicationError::TaskNotFound { .. } => crate::exitcode::UNSET,
                ApplicationError::Write { source, .. } => {
                    if source.kind() == std::io::ErrorKind::PermissionDenied {
                        crate::exitcode::NOPERM
                    } else {
                        crate::exitcode::IOERR
                    }
                }
                ApplicationError::NoConfigDir => crate::exitcode::CONFIG,
            },
        }
    }
}
