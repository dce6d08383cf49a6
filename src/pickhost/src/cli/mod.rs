// pickhost/src/cli/mod.rs

pub mod edit;
pub mod pick;

pub use edit::{edit_hosts, resolve_editor};
pub use pick::{pick_host, write_exports};
