// hostsfile/src/entry.rs

//! Host entries and the per-line entry grammar.
//!
//! A key names the entry and its place in the hierarchy, a value names the
//! accounts, the target address and an optional comment:
//!
//! ```text
//! key       ::= [segment "->"]* leaf ["!"]
//! segment   ::= trimmed-text ["!"]
//! value     ::= user-list "@" host ["#" comment]
//! user-list ::= user ["," user]*
//! ```

use crate::error::{HostsError, Result};
use std::fmt;

/// Separator between hierarchy segments in a key.
pub const HIERARCHY_SEPARATOR: &str = "->";

/// Suffix that marks an entry as critical.
pub const CRITICAL_MARKER: char = '!';

/// Stands in for an unknown ancestor when an entry is rendered.
const ANCESTOR_PLACEHOLDER: &str = "_";

/// One parsed host record with its hierarchy metadata.
///
/// `depth == 0` exactly when `parent` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Leaf name, not guaranteed unique within a group
    pub name: String,
    /// Account names in source order; never empty
    pub users: Vec<String>,
    pub host: String,
    /// Free text, empty when absent
    pub comment: String,
    /// Immediate parent's name
    pub parent: Option<String>,
    /// Number of segments before the leaf
    pub depth: usize,
    pub critical: bool,
}

impl HostEntry {
    /// The account used when the entry is selected.
    pub fn first_user(&self) -> &str {
        self.users.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Value side of the entry, `users@host [#comment]`.
    pub fn value_string(&self) -> String {
        let mut value = format!("{}@{}", self.users.join(","), self.host);
        if !self.comment.is_empty() {
            value.push_str(" #");
            value.push_str(&self.comment);
        }
        value
    }
}

/// Renders the entry as a `key = value` line that parses back to it.
///
/// Only the direct parent is known, so ancestors above it are written as
/// `_` placeholder segments to keep the depth. Entries that differ only in
/// those ancestors render the same key.
impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            for _ in 1..self.depth {
                write!(f, "{}{}", ANCESTOR_PLACEHOLDER, HIERARCHY_SEPARATOR)?;
            }
            write!(f, "{}{}", parent, HIERARCHY_SEPARATOR)?;
        }
        write!(f, "{}", self.name)?;
        if self.critical {
            write!(f, "{}", CRITICAL_MARKER)?;
        }
        write!(f, " = {}", self.value_string())
    }
}

/// Parse one `name = value` pair into a [`HostEntry`].
///
/// Fails with [`HostsError::MalformedEntry`] when the value is empty, has no
/// `@`, or has nothing but whitespace where the host belongs. Key-side
/// problems (such as an empty leaf name) are not rejected.
pub fn parse_value(name: &str, value: &str) -> Result<HostEntry> {
    if value.is_empty() {
        return Err(HostsError::malformed(name, value));
    }

    let key = parse_key(name);

    let (users, rest) = value
        .split_once('@')
        .ok_or_else(|| HostsError::malformed(name, value))?;
    let users = users.split(',').map(|u| u.trim().to_string()).collect();

    let (host, comment) = match rest.split_once('#') {
        Some((host, comment)) => (host.trim(), comment.trim()),
        None => (rest.trim(), ""),
    };
    if host.is_empty() {
        return Err(HostsError::malformed(name, value));
    }

    Ok(HostEntry {
        name: key.name,
        users,
        host: host.to_string(),
        comment: comment.to_string(),
        parent: key.parent,
        depth: key.depth,
        critical: key.critical,
    })
}

/// Key side of an entry.
#[derive(Debug, PartialEq)]
struct ParsedKey {
    name: String,
    parent: Option<String>,
    depth: usize,
    critical: bool,
}

fn parse_key(key: &str) -> ParsedKey {
    let segments: Vec<&str> = key.split(HIERARCHY_SEPARATOR).map(str::trim).collect();

    // split always yields at least one segment
    let leaf = segments[segments.len() - 1];
    let (name, critical) = match leaf.strip_suffix(CRITICAL_MARKER) {
        Some(stripped) => (stripped, true),
        None => (leaf, false),
    };

    let (parent, depth) = if segments.len() > 1 {
        let parent = segments[segments.len() - 2].replace(CRITICAL_MARKER, "");
        (Some(parent), segments.len() - 1)
    } else {
        (None, 0)
    };

    ParsedKey {
        name: name.to_string(),
        parent,
        depth,
        critical,
    }
}
