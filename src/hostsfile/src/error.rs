// hostsfile/src/error.rs

//! Error types for reading host catalogs.

use std::io;
use thiserror::Error;

/// Result type alias for hostsfile operations.
pub type Result<T> = std::result::Result<T, HostsError>;

/// Errors that can occur while reading a hosts file.
///
/// Every variant aborts the whole parse; no partial catalog is ever returned.
#[derive(Debug, Error)]
pub enum HostsError {
    /// I/O error when reading the file
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A `name = value` line whose value does not follow `users@host[#comment]`
    #[error("Malformed entry: {entry}")]
    MalformedEntry { entry: String },

    /// A child entry whose parent name was not placed at a shallower depth
    #[error("Failed to find parent '{parent}' for '{child}'")]
    OrphanReference { parent: String, child: String },

    /// A line the section scanner cannot classify
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Duplicate section '{section}' at line {line}")]
    DuplicateSection { section: String, line: usize },

    #[error("Duplicate key '{key}' in section '{section}' at line {line}")]
    DuplicateKey {
        section: String,
        key: String,
        line: usize,
    },
}

impl HostsError {
    /// Create a malformed-entry error from the offending key and value.
    pub fn malformed(name: &str, value: &str) -> Self {
        HostsError::MalformedEntry {
            entry: format!("{} = {}", name, value),
        }
    }

    /// Create a syntax error at a 1-based line number.
    pub fn syntax<S: Into<String>>(message: S, line: usize) -> Self {
        HostsError::Syntax {
            message: message.into(),
            line,
        }
    }

    /// Check if this error comes from the entry grammar or hierarchy rather
    /// than the file layout.
    pub fn is_entry_error(&self) -> bool {
        matches!(
            self,
            HostsError::MalformedEntry { .. } | HostsError::OrphanReference { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_carries_line_text() {
        let err = HostsError::malformed("web", "alice");
        assert_eq!(err.to_string(), "Malformed entry: web = alice");
        assert!(err.is_entry_error());
    }

    #[test]
    fn test_orphan_message() {
        let err = HostsError::OrphanReference {
            parent: "db".to_string(),
            child: "replica".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to find parent 'db' for 'replica'"
        );
    }

    #[test]
    fn test_syntax_error_is_not_entry_error() {
        let err = HostsError::syntax("missing delimiter", 3);
        assert_eq!(err.to_string(), "Syntax error at line 3: missing delimiter");
        assert!(!err.is_entry_error());
    }
}
