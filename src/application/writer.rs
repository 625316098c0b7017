//! Atomic updates to the user config file
//!
//! A `set` rewrites the whole file through a temporary file in the target
//! directory followed by a rename, so concurrent invocations and readers
//! see either the old or the new content, never a mix.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{validate_model, validate_task, ConfFile, SetOutcome};

/// Service that sets `task=model` entries in one config file.
///
/// The target path is injected; in the shipped CLI it is always the
/// user-level file (the system file is read-only to this tool).
pub struct ConfigWriter {
    path: PathBuf,
}

impl ConfigWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Set or update a task→model entry.
    ///
    /// Creates the file (and missing parent directories) if absent. An
    /// existing file is fully parsed first; comments, blank lines, and
    /// unrelated entries are preserved verbatim and in order, and a
    /// malformed file is refused rather than rewritten. On any failure the
    /// original file is left intact.
    pub fn set(&self, task: &str, model: &str) -> ApplicationResult<SetOutcome> {
        let task = task.trim();
        let model = model.trim();
        validate_task(task)?;
        validate_model(model)?;

        let mut doc = if self.path.is_file() {
            // Unlike resolution, an unreadable file is an error here:
            // treating it as empty would clobber its content on rewrite.
            let content = std::fs::read_to_string(&self.path)
                .map_err(|e| ApplicationError::write(&self.path, e))?;
            ConfFile::parse(&content, self.path.clone())?
        } else {
            ConfFile::empty(self.path.clone())
        };

        let outcome = doc.set(task, model);
        self.replace_content(&doc.render())?;

        debug!(
            "set: {}={} ({:?}) in {}",
            task,
            model,
            outcome,
            self.path.display()
        );
        Ok(outcome)
    }

    /// Swap in new file content atomically.
    ///
    /// The temp file is created in the target's own directory so the final
    /// rename never crosses filesystems. On Unix it is created mode 0600,
    /// which the persisted file keeps.
    fn replace_content(&self, content: &str) -> ApplicationResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| ApplicationError::write(&parent, e))?;

        let mut tmp =
            NamedTempFile::new_in(&parent).map_err(|e| ApplicationError::write(&self.path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| ApplicationError::write(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| ApplicationError::write(&self.path, e.error))?;
        Ok(())
    }
}
