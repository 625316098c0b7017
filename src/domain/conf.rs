//! Config file document: parsing, lookup, and in-place updates
//!
//! The `llm.conf` format is line-oriented: `#` or `//` comments, blank
//! lines, and `task=model` entries. The first `=` splits key from value;
//! the value may itself contain `=`. Anything else is malformed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::error::{DomainError, DomainResult};

/// Line prefixes that mark a whole line as a comment.
pub const COMMENT_MARKERS: [&str; 2] = ["#", "//"];

/// One classified line of a config file.
///
/// `Blank` and `Comment` keep their raw text so a rewrite reproduces them
/// byte-for-byte. An `Entry` keeps its raw text too; it is only re-rendered
/// when its value is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfLine {
    Blank(String),
    Comment(String),
    Entry {
        key: String,
        value: String,
        raw: String,
    },
}

/// A parsed config file: ordered lines plus the path it came from.
///
/// Lookup is by exact, case-sensitive key. When a key appears on more than
/// one line, the last occurrence wins on lookup and [`ConfFile::set`]
/// rewrites every defining line, so a set-then-get round trip holds even
/// for files that started out with duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfFile {
    pub path: PathBuf,
    pub lines: Vec<ConfLine>,
}

/// Whether [`ConfFile::set`] replaced an existing entry or appended a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Updated,
    Added,
}

impl ConfFile {
    /// An empty document, used when the target file does not exist yet.
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            lines: Vec::new(),
        }
    }

    /// Parse config file content.
    ///
    /// Malformed lines (no `=`, or an empty key or value after trimming)
    /// abort the parse with the 1-based line number and the offending
    /// content; they are never silently skipped.
    ///
    /// # Arguments
    /// * `content` - File content to parse
    /// * `path` - Path the content came from (error context only)
    pub fn parse(content: &str, path: PathBuf) -> DomainResult<Self> {
        let mut lines = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                lines.push(ConfLine::Blank(raw.to_string()));
                continue;
            }

            if is_comment(trimmed) {
                lines.push(ConfLine::Comment(raw.to_string()));
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(malformed(&path, idx, raw, "missing '='"));
            };
            let key = key.trim();
            let value = value.trim();

            if key.is_empty() {
                return Err(malformed(&path, idx, raw, "empty key"));
            }
            if value.is_empty() {
                return Err(malformed(&path, idx, raw, "empty value"));
            }

            lines.push(ConfLine::Entry {
                key: key.to_string(),
                value: value.to_string(),
                raw: raw.to_string(),
            });
        }

        Ok(Self { path, lines })
    }

    /// Look up the value for a key. Last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().rev().find_map(|line| match line {
            ConfLine::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Set `key` to `value`, replacing every line that defines `key` or
    /// appending a `key=value` line if none does.
    ///
    /// Callers pass a trimmed, validated key and value (see
    /// [`validate_task`] and [`validate_model`]).
    pub fn set(&mut self, key: &str, value: &str) -> SetOutcome {
        let mut updated = false;

        for line in &mut self.lines {
            if let ConfLine::Entry {
                key: k,
                value: v,
                raw,
            } = line
            {
                if k == key {
                    *v = value.to_string();
                    *raw = format!("{key}={value}");
                    updated = true;
                }
            }
        }

        if updated {
            SetOutcome::Updated
        } else {
            self.lines.push(ConfLine::Entry {
                key: key.to_string(),
                value: value.to_string(),
                raw: format!("{key}={value}"),
            });
            SetOutcome::Added
        }
    }

    /// Collapse the document into a key→value map. Later lines override
    /// earlier ones, matching [`ConfFile::get`].
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for line in &self.lines {
            if let ConfLine::Entry { key, value, .. } = line {
                map.insert(key.clone(), value.clone());
            }
        }
        map
    }

    /// Render the document back to file content.
    ///
    /// Unmodified lines reproduce their original text; the file always ends
    /// with a newline (added if the source lacked one).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let raw = match line {
                ConfLine::Blank(raw) | ConfLine::Comment(raw) => raw,
                ConfLine::Entry { raw, .. } => raw,
            };
            out.push_str(raw);
            out.push('\n');
        }
        out
    }
}

fn malformed(path: &Path, idx: usize, raw: &str, reason: &'static str) -> DomainError {
    DomainError::MalformedLine {
        path: path.to_path_buf(),
        line: idx + 1,
        content: raw.trim().to_string(),
        reason,
    }
}

/// Whether a trimmed line is a comment.
fn is_comment(trimmed: &str) -> bool {
    COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m))
}

/// Check a task name before it is written or resolved.
///
/// A task must survive the round trip through the file format: it cannot be
/// empty, contain `=` (the delimiter) or a newline, or start with a comment
/// marker (the line would vanish on the next parse).
pub fn validate_task(task: &str) -> DomainResult<()> {
    if task.is_empty()
        || task.contains('=')
        || task.contains('\n')
        || task.contains('\r')
        || is_comment(task)
    {
        return Err(DomainError::InvalidTask(task.to_string()));
    }
    Ok(())
}

/// Check a model value before it is written. Values may contain `=` and
/// `#`; only empty values and embedded newlines are rejected.
pub fn validate_model(model: &str) -> DomainResult<()> {
    if model.is_empty() || model.contains('\n') || model.contains('\r') {
        return Err(DomainError::InvalidModel(model.to_string()));
    }
    Ok(())
}
