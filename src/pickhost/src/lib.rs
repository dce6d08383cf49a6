// pickhost/src/lib.rs

pub mod cache;
pub mod cli;
pub mod constants;
pub mod dirs;
pub mod picker;

// Re-export commonly used types
pub use cache::{CacheManager, CachedEntry};
pub use dirs::AppDirs;
pub use picker::{Menu, MenuItem, Picker, PromptPicker, Target};
