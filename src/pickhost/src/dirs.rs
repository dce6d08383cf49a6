// pickhost/src/dirs.rs

use crate::constants::{APP_DIR_NAME, HOSTS_FILE_NAME};
use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Config and cache roots for the current platform.
#[derive(Debug, Clone)]
pub struct AppDirs {
    config_root: PathBuf,
    cache_root: PathBuf,
}

impl AppDirs {
    /// Locate the roots following the platform conventions
    ///
    /// On Linux the XDG roots (`$XDG_CONFIG_HOME`, `$XDG_CACHE_HOME`, or their
    /// `~/.config`, `~/.cache` defaults) must already exist. On macOS both live
    /// under `~/Library/Application Support/pickhost` and are created on demand.
    pub fn discover() -> Result<Self> {
        let base = BaseDirs::new().context("Unable to determine the home directory")?;

        let dirs = if cfg!(target_os = "linux") {
            Self::from_roots(
                existing_dir(base.config_dir())?,
                existing_dir(base.cache_dir())?,
            )
        } else if cfg!(target_os = "macos") {
            let app_dir = base.data_dir().join(APP_DIR_NAME);
            let config_root = app_dir.join("config");
            let cache_root = app_dir.join("cache");
            for dir in [&config_root, &cache_root] {
                fs_err::create_dir_all(dir)
                    .context(format!("Failed to create directory: {}", dir.display()))?;
            }
            Self::from_roots(config_root, cache_root)
        } else {
            bail!("The tool doesn't support the OS. Aborted.");
        };

        debug!(
            "config root: {}, cache root: {}",
            dirs.config_root.display(),
            dirs.cache_root.display()
        );
        Ok(dirs)
    }

    pub fn from_roots(config_root: PathBuf, cache_root: PathBuf) -> Self {
        Self {
            config_root,
            cache_root,
        }
    }

    /// Path of the default hosts file (`<config root>/pickhost/hosts`)
    ///
    /// With `create`, a missing file is created empty along with its
    /// directory; otherwise a missing file is an error.
    pub fn hosts_file(&self, create: bool) -> Result<PathBuf> {
        let path = self.config_root.join(APP_DIR_NAME).join(HOSTS_FILE_NAME);
        if path.exists() {
            return Ok(path);
        }
        if !create {
            bail!("Hosts file {} doesn't exist", path.display());
        }
        touch(&path)?;
        Ok(path)
    }

    /// Path of the last-selection cache, created empty when missing
    pub fn cache_file(&self) -> Result<PathBuf> {
        let path = self.cache_root.join(APP_DIR_NAME).join(HOSTS_FILE_NAME);
        if !path.exists() {
            touch(&path)?;
        }
        Ok(path)
    }
}

fn existing_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        bail!("Directory {} doesn't exist", dir.display());
    }
    Ok(dir.to_path_buf())
}

fn touch(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    fs_err::File::create(path).context(format!("Failed to create {}", path.display()))?;
    debug!("created empty {}", path.display());
    Ok(())
}
