//! Config file locations
//!
//! Resolution precedence (first defining file wins):
//! 1. User config: `<platform config dir>/llm-manager/llm.conf`
//! 2. System config: `/etc/llm.conf`
//!
//! Both locations are discovered once and carried as an explicit
//! [`ConfigPaths`] value; nothing else in the crate touches well-known
//! paths, so tests run against temporary directories and the CLI can
//! override either location.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::application::{ApplicationError, ApplicationResult};

/// File name used for both the user and the system config.
pub const CONFIG_FILE_NAME: &str = "llm.conf";

/// Fixed system-wide config location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/llm.conf";

/// The two config file locations, user taking precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub user: PathBuf,
    pub system: PathBuf,
}

impl ConfigPaths {
    /// Explicit locations (tests and CLI overrides).
    pub fn new(user: impl Into<PathBuf>, system: impl Into<PathBuf>) -> Self {
        Self {
            user: user.into(),
            system: system.into(),
        }
    }

    /// Standard locations for this platform.
    pub fn discover() -> ApplicationResult<Self> {
        Self::with_overrides(None, None)
    }

    /// Standard locations, with either one replaced by an override.
    ///
    /// User-path discovery only runs when no user override is given, so an
    /// explicit `--user-config` works even on systems without a resolvable
    /// home directory.
    pub fn with_overrides(
        user: Option<PathBuf>,
        system: Option<PathBuf>,
    ) -> ApplicationResult<Self> {
        let user = match user {
            Some(path) => path,
            None => default_user_config_path().ok_or(ApplicationError::NoConfigDir)?,
        };
        let system = system.unwrap_or_else(|| PathBuf::from(SYSTEM_CONFIG_PATH));
        Ok(Self { user, system })
    }
}

/// Per-user config file location via the platform config directory
/// (`~/.config/llm-manager/llm.conf` on Linux).
pub fn default_user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "llm-manager")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
