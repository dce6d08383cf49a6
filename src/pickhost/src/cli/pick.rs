// pickhost/src/cli/pick.rs

use crate::cache::CacheManager;
use crate::constants::{EXPORT_PREFIX, LAST_ACCESSED};
use crate::picker::{Menu, Picker, Target};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Show the hosts file in the picker and report the selection
///
/// The selection is remembered in the cache and written to `out` as shell
/// `export` lines. Nothing is written when the user cancels.
pub fn pick_host<P: Picker, W: Write>(
    hosts_file: &Path,
    cache: &CacheManager,
    picker: &mut P,
    out: &mut W,
) -> Result<Option<Target>> {
    let cached = cache.load()?;

    let catalog = hostsfile::read(hosts_file)
        .context(format!("Error parsing hosts file {}", hosts_file.display()))?;
    debug!(
        "loaded {} groups, {} entries from {}",
        catalog.len(),
        catalog.entry_count(),
        hosts_file.display()
    );

    // An empty file has nothing worth showing.
    if catalog.is_empty() {
        anyhow::bail!(
            "File {} is empty. Please rerun the command with -e option to add hosts first.",
            hosts_file.display()
        );
    }

    let menu = Menu::new(cached.as_ref(), &catalog);
    let Some(item) = picker.pick(&menu)? else {
        info!("selection cancelled");
        return Ok(None);
    };

    let target = item.target.clone();
    cache.save(&target, LAST_ACCESSED)?;
    write_exports(&target, out)?;
    Ok(Some(target))
}

/// Write `export PH_NAME="..."` style lines for a selection
pub fn write_exports<W: Write>(target: &Target, out: &mut W) -> Result<()> {
    let fields = [
        ("name", &target.name),
        ("user", &target.user),
        ("host", &target.host),
    ];
    for (key, value) in fields {
        writeln!(
            out,
            "export {}{}=\"{}\"",
            EXPORT_PREFIX,
            key.to_uppercase(),
            value
        )?;
    }
    Ok(())
}
