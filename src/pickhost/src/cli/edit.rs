// pickhost/src/cli/edit.rs

use crate::constants::FALLBACK_EDITOR;
use anyhow::{bail, Context, Result};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Open the hosts file in the user's editor and wait for it to exit
pub fn edit_hosts(hosts_file: &Path) -> Result<()> {
    let editor = resolve_editor(std::env::var_os("EDITOR"))?;
    debug!("editing {} with {}", hosts_file.display(), editor.display());

    let status = Command::new(&editor)
        .arg(hosts_file)
        .status()
        .context(format!("Failed to run editor {}", editor.display()))?;
    if !status.success() {
        bail!("Editor {} exited with {}", editor.display(), status);
    }
    Ok(())
}

/// Pick the editor binary
///
/// `$EDITOR` wins when set and must name an existing file; otherwise
/// `/usr/bin/vi`, which must exist too.
pub fn resolve_editor(editor_var: Option<OsString>) -> Result<PathBuf> {
    if let Some(editor) = editor_var {
        let editor = PathBuf::from(editor);
        if !editor.is_file() {
            bail!("EDITOR ({}) not found", editor.display());
        }
        return Ok(editor);
    }

    let fallback = PathBuf::from(FALLBACK_EDITOR);
    if !fallback.is_file() {
        bail!("{} not found", fallback.display());
    }
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_editor_variable_must_be_a_file() {
        let editor = NamedTempFile::new().unwrap();
        let resolved = resolve_editor(Some(editor.path().as_os_str().to_owned())).unwrap();
        assert_eq!(resolved, editor.path());

        let err = resolve_editor(Some(OsString::from("/definitely/not/an/editor"))).unwrap_err();
        assert!(err.to_string().contains("EDITOR"));
    }

    #[test]
    fn test_fallback_editor() {
        let result = resolve_editor(None);
        if Path::new(FALLBACK_EDITOR).is_file() {
            assert_eq!(result.unwrap(), PathBuf::from(FALLBACK_EDITOR));
        } else {
            assert!(result.is_err());
        }
    }
}
