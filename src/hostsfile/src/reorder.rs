// hostsfile/src/reorder.rs

//! Rebuilds display order from flat (name, parent, depth) records.
//!
//! Entries are placed one depth at a time into a single growing sequence.
//! A child goes right after the last descendant of the first already-placed
//! entry carrying its parent's name. No tree is built; names are the only
//! cross-reference, so when several entries share a name the first one in
//! the output is always the parent.

use crate::entry::HostEntry;
use crate::error::{HostsError, Result};
use log::trace;

/// Order a group's entries depth-first, children after their parent.
///
/// Entries of equal depth keep their input order relative to each other.
/// Fails with [`HostsError::OrphanReference`] when a child's parent cannot be
/// found among the entries placed at shallower depths.
pub fn reorder(entries: Vec<HostEntry>) -> Result<Vec<HostEntry>> {
    let mut output = Vec::with_capacity(entries.len());
    let mut pending = entries;
    let mut depth = 0;

    while !pending.is_empty() {
        let (current, rest): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|entry| entry.depth == depth);

        for entry in current {
            if entry.is_top_level() {
                output.push(entry);
            } else {
                insert_after_parent(&mut output, entry)?;
            }
        }

        pending = rest;
        depth += 1;
    }

    Ok(output)
}

/// Insert `entry` after the descendant run of its parent in `output`.
fn insert_after_parent(output: &mut Vec<HostEntry>, entry: HostEntry) -> Result<()> {
    let parent_name = entry.parent.as_deref().unwrap_or_default();

    let Some(parent_idx) = output.iter().position(|e| e.name == parent_name) else {
        return Err(HostsError::OrphanReference {
            parent: parent_name.to_string(),
            child: entry.name,
        });
    };
    let parent_depth = output[parent_idx].depth;

    // The run ends at the first sibling or ancestor of the parent.
    let insert_at = output[parent_idx + 1..]
        .iter()
        .position(|e| e.depth <= parent_depth)
        .map_or(output.len(), |offset| parent_idx + 1 + offset);

    trace!(
        "placing '{}' under '{}' at position {}",
        entry.name,
        parent_name,
        insert_at
    );
    output.insert(insert_at, entry);
    Ok(())
}
