//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the config file format or of
/// the task/model input rules. These are independent of I/O concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("malformed line {line} in {path}: '{content}': {reason}")]
    MalformedLine {
        path: PathBuf,
        /// 1-based line number
        line: usize,
        content: String,
        reason: &'static str,
    },

    #[error(
        "invalid task name '{0}': must be non-empty, contain no '=' or newline, \
         and not start with a comment marker"
    )]
    InvalidTask(String),

    #[error("invalid model value '{0}': must be non-empty and contain no newline")]
    InvalidModel(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
