// pickhost/src/constants.rs

/// Directory created under the platform config and cache roots.
pub const APP_DIR_NAME: &str = "pickhost";

/// File name of both the hosts file and the last-selection cache.
pub const HOSTS_FILE_NAME: &str = "hosts";

/// Description stored with the last selected entry.
pub const LAST_ACCESSED: &str = "Last Accessed";

/// Prefix of the variables printed after a selection.
pub const EXPORT_PREFIX: &str = "PH_";

/// Editor used when `$EDITOR` is not set.
pub const FALLBACK_EDITOR: &str = "/usr/bin/vi";

/// Environment variable overriding the hosts file location.
pub const HOSTS_FILE_ENV: &str = "PICKHOST_FILE";
