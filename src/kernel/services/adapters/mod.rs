//! Filesystem adapters: app directories, settings file, items file.

pub mod dirs;
pub mod items;
pub mod settings;

pub use dirs::{ensure_log_dir, get_cache_dir};
pub use items::load_items;
pub use settings::{ensure_settings_file, get_settings_path, load_settings_from};
