//! llm-manager: layered task→model configuration lookup
//!
//! Resolution checks the user config file, then the system config file,
//! then a built-in default table. `set` rewrites the user file atomically,
//! preserving comments and unrelated entries.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, ConfigWriter, Resolver};
pub use config::ConfigPaths;
pub use domain::{ConfFile, DefaultTable, DomainError};
