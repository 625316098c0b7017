//! Layered task→model resolution
//!
//! Lookup order, first hit wins: user config file, system config file,
//! builtin default table. Both files are re-read on every call so external
//! edits show up immediately.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::ConfigPaths;
use crate::domain::{ConfFile, DefaultTable, DomainError};

/// Which layer supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    System,
    Builtin,
}

/// A resolved model plus the layer it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub model: String,
    pub origin: Origin,
}

/// Service resolving tasks against the two config files and a default table.
///
/// Paths and defaults are injected at construction; the resolver holds no
/// other state and never caches file content.
pub struct Resolver {
    paths: ConfigPaths,
    defaults: DefaultTable,
}

impl Resolver {
    pub fn new(paths: ConfigPaths, defaults: DefaultTable) -> Self {
        Self { paths, defaults }
    }

    /// Resolve one task to a model identifier.
    ///
    /// Fails with [`ApplicationError::TaskNotFound`] when the task is in
    /// neither file nor the default table, and with a parse error when a
    /// present file is malformed (no partial resolution).
    pub fn resolve(&self, task: &str) -> ApplicationResult<Resolution> {
        if task.is_empty() {
            return Err(DomainError::InvalidTask(task.to_string()).into());
        }

        let user = read_layer(&self.paths.user)?;
        let system = read_layer(&self.paths.system)?;

        let resolution = if let Some(model) = user.get(task) {
            Resolution {
                model: model.clone(),
                origin: Origin::User,
            }
        } else if let Some(model) = system.get(task) {
            Resolution {
                model: model.clone(),
                origin: Origin::System,
            }
        } else if let Some(model) = self.defaults.get(task) {
            Resolution {
                model: model.to_string(),
                origin: Origin::Builtin,
            }
        } else {
            return Err(ApplicationError::TaskNotFound {
                task: task.to_string(),
            });
        };

        debug!(
            "resolve: task={} model={} origin={:?}",
            task, resolution.model, resolution.origin
        );
        Ok(resolution)
    }

    /// All tasks defined in either file, user entries overriding system
    /// ones. The default table is not included.
    pub fn merged(&self) -> ApplicationResult<BTreeMap<String, String>> {
        let mut merged = read_layer(&self.paths.system)?;
        merged.extend(read_layer(&self.paths.user)?);
        Ok(merged)
    }
}

/// Read one config layer into a map.
///
/// An absent path (or one that is not a regular file) is an empty layer.
/// A present file that cannot be read gets a warning and counts as empty,
/// matching the long-standing behavior for permission-restricted system
/// files. Malformed content is an error.
fn read_layer(path: &Path) -> ApplicationResult<BTreeMap<String, String>> {
    if !path.is_file() {
        debug!("read_layer: absent {}", path.display());
        return Ok(BTreeMap::new());
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: cannot read {}: {}", path.display(), e);
            return Ok(BTreeMap::new());
        }
    };

    let doc = ConfFile::parse(&content, path.to_path_buf())?;
    let map = doc.to_map();
    debug!("read_layer: {} entries from {}", map.len(), path.display());
    Ok(map)
}
