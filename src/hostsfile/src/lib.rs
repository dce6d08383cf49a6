// hostsfile/src/lib.rs

//! Reader for hierarchical catalogs of remote-access targets.
//!
//! A hosts file is a sectioned `key = value` file. Each section is a group,
//! each line an entry:
//!
//! ```text
//! [work]
//! web!          = deploy,www@10.0.0.1   # front end
//! db            = root@10.0.0.2
//! db -> replica = root@10.0.0.3
//! ```
//!
//! This library provides:
//! - The entry grammar ([`parse_value`])
//! - Hierarchy reordering without a tree ([`reorder`])
//! - Section reading with `DEFAULT` inheritance ([`scanner`])
//! - The file-level assembler ([`read`], [`reads`])

pub mod catalog;
pub mod entry;
pub mod error;
pub mod parser;
pub mod reorder;
pub mod scanner;

use std::path::Path;

pub use catalog::HostCatalog;
pub use entry::{parse_value, HostEntry};
pub use error::{HostsError, Result};
pub use parser::CatalogParser;
pub use reorder::reorder;

/// Parse a hosts file from a file path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), hostsfile::HostsError> {
///     let catalog = hostsfile::read("hosts")?;
///     println!("{}", catalog);
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<HostCatalog> {
    let contents = fs_err::read_to_string(path.as_ref())?;
    reads(&contents)
}

/// Parse a hosts file from a string.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), hostsfile::HostsError> {
///     let catalog = hostsfile::reads("[lab]\npi = pi@10.0.0.9\n")?;
///     assert_eq!(catalog.get_group("lab").unwrap()[0].host, "10.0.0.9");
///     Ok(())
/// }
/// ```
pub fn reads(content: &str) -> Result<HostCatalog> {
    CatalogParser::new(content).parse()
}
