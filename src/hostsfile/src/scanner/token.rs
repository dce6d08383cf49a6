// hostsfile/src/scanner/token.rs

//! Classified lines of a sectioned key/value file.

/// One physical line of input after classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// What the line looks like in isolation
    pub kind: LineKind,
    /// The line with surrounding whitespace removed
    pub text: String,
    /// Number of leading whitespace characters
    pub indent: usize,
    /// Line number (1-based)
    pub number: usize,
}

impl Line {
    pub fn new(kind: LineKind, text: String, indent: usize, number: usize) -> Self {
        Self {
            kind,
            text,
            indent,
            number,
        }
    }

    /// Blank and comment lines never carry data.
    pub fn is_ignorable(&self) -> bool {
        matches!(self.kind, LineKind::Blank | LineKind::Comment)
    }
}

/// Context-free line categories.
///
/// Whether a line continues the previous value depends on indentation and on
/// what came before it, so continuation is decided by the section reader, not
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Starts with `#` or `;` after trimming
    Comment,
    /// `[name]`
    SectionHeader { name: String },
    /// `key = value` or `key: value`
    Assignment { key: String, value: String },
    /// Anything else
    Bare,
}
