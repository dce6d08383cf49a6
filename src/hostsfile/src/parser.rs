// hostsfile/src/parser.rs

//! Turns sectioned text into a [`HostCatalog`].

use crate::catalog::HostCatalog;
use crate::entry::{parse_value, HostEntry};
use crate::error::Result;
use crate::reorder::reorder;
use crate::scanner::{read_sections, RawSection};
use linked_hash_map::LinkedHashMap;
use log::debug;

/// Parses a whole hosts file.
///
/// Every section, reserved ones included, goes through the entry grammar and
/// the reorder engine. `DEFAULT` and `_global` are then dropped when they
/// hold no entries. Any error aborts the whole parse.
pub struct CatalogParser<'a> {
    input: &'a str,
}

impl<'a> CatalogParser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parse the input and return the catalog.
    pub fn parse(&self) -> Result<HostCatalog> {
        let sections = read_sections(self.input)?;
        let mut groups = LinkedHashMap::new();

        for section in sections {
            let entries = parse_section(&section)?;
            debug!(
                "section '{}': {} entries",
                section.name,
                entries.len()
            );

            if entries.is_empty() && section.is_reserved() {
                continue;
            }
            groups.insert(section.name, entries);
        }

        Ok(HostCatalog::from_groups(groups))
    }
}

fn parse_section(section: &RawSection) -> Result<Vec<HostEntry>> {
    let entries = section
        .options
        .iter()
        .map(|(key, value)| parse_value(key, value))
        .collect::<Result<Vec<_>>>()?;
    reorder(entries)
}
