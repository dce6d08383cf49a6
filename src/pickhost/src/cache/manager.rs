// pickhost/src/cache/manager.rs

use crate::picker::Target;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// The single remembered selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    pub name: String,
    pub user: String,
    pub host: String,
    pub description: String,
}

impl CachedEntry {
    /// Text shown in the picker, e.g. `Last Accessed: web`
    pub fn label(&self) -> String {
        format!("{}: {}", self.description, self.name)
    }

    pub fn target(&self) -> Target {
        Target {
            name: self.name.clone(),
            user: self.user.clone(),
            host: self.host.clone(),
        }
    }

    /// Parse `<name> = <user>@<host> #<description>`
    fn parse(line: &str) -> Option<Self> {
        let (name, rest) = line.split_once('=')?;
        let (user, rest) = rest.split_once('@')?;
        let (host, description) = rest.split_once('#')?;
        Some(Self {
            name: name.trim().to_string(),
            user: user.trim().to_string(),
            host: host.trim().to_string(),
            description: description.trim().to_string(),
        })
    }
}

/// Manages the one-line last-selection cache file
pub struct CacheManager {
    cache_file: PathBuf,
}

impl CacheManager {
    /// Create a manager for an existing (possibly empty) cache file
    pub fn new(cache_file: PathBuf) -> Self {
        Self { cache_file }
    }

    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }

    /// Load the remembered selection, if any
    ///
    /// A cache line that doesn't have the expected shape is ignored.
    pub fn load(&self) -> Result<Option<CachedEntry>> {
        let content = fs_err::read_to_string(&self.cache_file).context(format!(
            "Error reading cache file {}",
            self.cache_file.display()
        ))?;

        let line = content.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match CachedEntry::parse(line) {
            Some(entry) => {
                debug!("cached selection: {}", entry.name);
                Ok(Some(entry))
            }
            None => {
                warn!(
                    "ignoring unreadable cache file {}: {:?}",
                    self.cache_file.display(),
                    line
                );
                Ok(None)
            }
        }
    }

    /// Overwrite the cache with a single selection
    pub fn save(&self, target: &Target, description: &str) -> Result<()> {
        let line = format!(
            "{} = {}@{} #{}",
            target.name, target.user, target.host, description
        );
        fs_err::write(&self.cache_file, line).context(format!(
            "Error writing cache file {}",
            self.cache_file.display()
        ))?;
        Ok(())
    }
}
