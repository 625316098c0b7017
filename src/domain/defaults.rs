//! Built-in task→model defaults
//!
//! Used only when a task is defined in neither config file. The table is an
//! explicit value handed to the resolver at construction, never ambient
//! state, so tests can substitute their own.

use std::collections::BTreeMap;

/// Compiled-in defaults for the tasks shipped with the tool.
const BUILTIN_DEFAULTS: &[(&str, &str)] = &[
    ("chat", "llama3.2:3b"),
    ("code-completion", "deepseek-coder:1.3b"),
    ("test", "tinyllama:1b"),
    ("text-generation", "gemma2:2b"),
    ("tool-use", "llama3.2:3b"),
    ("translation", "mixtral:8x7b"),
    ("vision", "llava:7b"),
];

/// Immutable task→model fallback table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTable {
    entries: BTreeMap<String, String>,
}

impl DefaultTable {
    /// Build a table from explicit pairs (test fixtures mostly).
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(task, model)| (task.to_string(), model.to_string()))
                .collect(),
        }
    }

    /// Table with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, task: &str) -> Option<&str> {
        self.entries.get(task).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DefaultTable {
    /// The builtin table shipped with the tool.
    fn default() -> Self {
        Self::from_pairs(BUILTIN_DEFAULTS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_contents() {
        let table = DefaultTable::default();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get("text-generation"), Some("gemma2:2b"));
        assert_eq!(table.get("code-completion"), Some("deepseek-coder:1.3b"));
        assert_eq!(table.get("nonexistent"), None);
    }

    #[test]
    fn test_from_pairs_builds_exact_matches() {
        let table = DefaultTable::from_pairs([("a", "m1"), ("b", "m2")]);
        assert_eq!(table.get("a"), Some("m1"));
        assert_eq!(table.get("B"), None, "lookup is case-sensitive");
    }
}
