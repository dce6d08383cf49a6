// hostsfile/src/scanner/sections.rs

//! Stateful reader that groups classified lines into sections.

use super::scanner::Scanner;
use super::token::{Line, LineKind};
use crate::error::{HostsError, Result};
use std::collections::HashSet;

/// Section every other section inherits keys from.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Synthetic section holding keys written before the first header.
pub const GLOBAL_SECTION: &str = "_global";

/// A section with its options in file order, inheritance already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub name: String,
    pub options: Vec<(String, String)>,
}

impl RawSection {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: Vec::new(),
        }
    }

    /// Check if this is one of the two sections dropped when empty.
    pub fn is_reserved(&self) -> bool {
        self.name == DEFAULT_SECTION || self.name == GLOBAL_SECTION
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Option being accumulated; values may span several physical lines.
#[derive(Debug)]
struct PendingOption {
    key: String,
    lines: Vec<String>,
}

impl PendingOption {
    fn finish(self) -> (String, String) {
        (self.key, self.lines.join("\n").trim_end().to_string())
    }
}

#[derive(Debug)]
struct SectionBuf {
    name: String,
    options: Vec<PendingOption>,
}

impl SectionBuf {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: Vec::new(),
        }
    }
}

/// Reads sectioned `key = value` text.
///
/// Index 0 of the internal buffer is `DEFAULT`, index 1 is the synthetic
/// `_global` section, explicit sections follow in file order.
#[derive(Debug)]
pub struct SectionReader {
    sections: Vec<SectionBuf>,
    seen_sections: HashSet<String>,
    seen_keys: HashSet<(usize, String)>,
    current: usize,
    open_option: Option<usize>,
    indent_level: usize,
}

impl SectionReader {
    pub fn new() -> Self {
        let mut seen_sections = HashSet::new();
        seen_sections.insert(GLOBAL_SECTION.to_string());
        Self {
            sections: vec![
                SectionBuf::new(DEFAULT_SECTION),
                SectionBuf::new(GLOBAL_SECTION),
            ],
            seen_sections,
            seen_keys: HashSet::new(),
            current: 1,
            open_option: None,
            indent_level: 0,
        }
    }

    /// Read the whole input and return the sections in iteration order.
    pub fn read(mut self, input: &str) -> Result<Vec<RawSection>> {
        for line in Scanner::new(input).scan_all() {
            self.feed(line)?;
        }
        Ok(self.finish())
    }

    fn feed(&mut self, line: Line) -> Result<()> {
        if line.kind == LineKind::Blank {
            // Kept provisionally; trailing blanks are trimmed on finish.
            if let Some(idx) = self.open_option {
                self.sections[self.current].options[idx]
                    .lines
                    .push(String::new());
            }
            return Ok(());
        }
        if line.is_ignorable() {
            return Ok(());
        }

        if let Some(idx) = self.open_option {
            if line.indent > self.indent_level {
                self.sections[self.current].options[idx]
                    .lines
                    .push(line.text);
                return Ok(());
            }
        }

        self.indent_level = line.indent;
        match line.kind {
            LineKind::SectionHeader { name } => self.open_section(name, line.number),
            LineKind::Assignment { key, value } => self.open_option(key, value, line.number),
            _ => Err(HostsError::syntax(
                format!("expected a section header or `key = value`, found '{}'", line.text),
                line.number,
            )),
        }
    }

    fn open_section(&mut self, name: String, line: usize) -> Result<()> {
        self.open_option = None;
        if name == DEFAULT_SECTION {
            self.current = 0;
            return Ok(());
        }
        if !self.seen_sections.insert(name.clone()) {
            return Err(HostsError::DuplicateSection {
                section: name,
                line,
            });
        }
        self.sections.push(SectionBuf::new(&name));
        self.current = self.sections.len() - 1;
        Ok(())
    }

    fn open_option(&mut self, key: String, value: String, line: usize) -> Result<()> {
        let key = key.to_lowercase();
        if key.is_empty() {
            return Err(HostsError::syntax("empty key", line));
        }
        if !self.seen_keys.insert((self.current, key.clone())) {
            return Err(HostsError::DuplicateKey {
                section: self.sections[self.current].name.clone(),
                key,
                line,
            });
        }

        let section = &mut self.sections[self.current];
        section.options.push(PendingOption {
            key,
            lines: vec![value],
        });
        self.open_option = Some(section.options.len() - 1);
        Ok(())
    }

    fn finish(self) -> Vec<RawSection> {
        let mut buffers = self.sections.into_iter();
        let defaults: Vec<(String, String)> = buffers
            .next()
            .map(|buf| buf.options.into_iter().map(PendingOption::finish).collect())
            .unwrap_or_default();

        let mut result = Vec::with_capacity(buffers.len() + 1);
        result.push(RawSection {
            name: DEFAULT_SECTION.to_string(),
            options: defaults.clone(),
        });

        for buf in buffers {
            let mut section = RawSection::new(&buf.name);
            section.options = buf
                .options
                .into_iter()
                .map(PendingOption::finish)
                .collect();
            for (key, value) in &defaults {
                if section.get(key).is_none() {
                    section.options.push((key.clone(), value.clone()));
                }
            }
            result.push(section);
        }

        result
    }
}

impl Default for SectionReader {
    fn default() -> Self {
        Self::new()
    }
}
