// hostsfile/src/scanner/mod.rs

//! Line scanner and section reader for sectioned `key = value` files.
//!
//! Reading happens in two passes:
//! 1. The [`Scanner`] classifies every physical line on its own.
//! 2. The [`SectionReader`] walks the classified lines with state (current
//!    section, current option, indentation) and produces [`RawSection`]s with
//!    `DEFAULT` inheritance applied.

pub mod scanner;
pub mod sections;
pub mod token;

pub use scanner::Scanner;
pub use sections::{RawSection, SectionReader, DEFAULT_SECTION, GLOBAL_SECTION};
pub use token::{Line, LineKind};

use crate::error::Result;

/// Convenience function to read the input into sections.
pub fn read_sections(input: &str) -> Result<Vec<RawSection>> {
    SectionReader::new().read(input)
}
