// hostsfile/src/catalog.rs

//! Ordered mapping from group name to its ordered entries.

use crate::entry::HostEntry;
use crate::scanner::GLOBAL_SECTION;
use linked_hash_map::LinkedHashMap;
use std::fmt;

/// All groups of a hosts file, in file order, each already reordered.
///
/// Built once per parse and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostCatalog {
    groups: LinkedHashMap<String, Vec<HostEntry>>,
}

impl HostCatalog {
    pub(crate) fn from_groups(groups: LinkedHashMap<String, Vec<HostEntry>>) -> Self {
        Self { groups }
    }

    /// Get a group's entries by name.
    pub fn get_group(&self, name: &str) -> Option<&[HostEntry]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Get all group names in order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Get an iterator over all groups in order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[HostEntry])> {
        self.groups
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Check if the catalog has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Writes the catalog back in hosts-file form.
///
/// Entries of the top-of-file group come first with no header, since an
/// explicit `[_global]` header does not parse.
impl fmt::Display for HostCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(entries) = self.get_group(GLOBAL_SECTION) {
            for entry in entries {
                writeln!(f, "{}", entry)?;
            }
            first = entries.is_empty();
        }
        for (name, entries) in self.groups() {
            if name == GLOBAL_SECTION {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            writeln!(f, "[{}]", name)?;
            for entry in entries {
                writeln!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}
