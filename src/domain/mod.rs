//! Domain layer: config file format and builtin defaults
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod conf;
pub mod defaults;
pub mod error;

pub use conf::{validate_model, validate_task, ConfFile, ConfLine, SetOutcome, COMMENT_MARKERS};
pub use defaults::DefaultTable;
pub use error::{DomainError, DomainResult};
