use std::{fs, path::Path};

use crate::error::SessionError;

/// One successfully evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression as the user typed it.
    pub expression: String,
    /// The value it evaluated to.
    pub result:     f64,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Append-only log of evaluated expressions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an evaluated expression.
    pub fn record(&mut self, expression: impl Into<String>, result: f64) {
        self.entries.push(HistoryEntry { expression: expression.into(),
                                         result });
    }

    /// Returns the entries in the order they were recorded.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Renders the history one entry per line, each line terminated by `\n`.
    #[must_use]
    pub fn to_lines(&self) -> String {
        self.entries.iter().map(|entry| format!("{entry}\n")).collect()
    }

    /// Writes the history to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns `SessionError::Export` if the file cannot be written.
    pub fn export(&self, path: &Path) -> Result<(), SessionError> {
        fs::write(path, self.to_lines()).map_err(|source| SessionError::Export { path:
                                                                                     path.to_path_buf(),
                                                                                 source })
    }
}
