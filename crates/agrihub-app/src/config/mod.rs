//! Configuration and local storage for AgriHub
//!
//! Supports:
//! - `<data_dir>/config.toml` - Timing and behaviour settings
//! - `<data_dir>/storage.toml` - Persisted user preferences (dark mode)

pub mod settings;
pub mod storage;
pub mod types;

pub use settings::{init_data_dir, load_settings, save_settings, CONFIG_FILENAME};
pub use storage::{LocalStorage, DARK_MODE_KEY, STORAGE_FILENAME};
pub use types::*;
