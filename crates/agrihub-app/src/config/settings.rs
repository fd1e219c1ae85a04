//! Settings parser for `<data_dir>/config.toml`

use std::path::Path;

use super::types::Settings;
use agrihub_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";

/// Load settings from `<data_dir>/config.toml`
///
/// Returns defaults if the file is missing or cannot be parsed.
pub fn load_settings(data_dir: &Path) -> Settings {
    let config_path = data_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the data directory and a commented default `config.toml` if absent
pub fn init_data_dir(data_dir: &Path) -> Result<()> {
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| Error::config(format!("Failed to create data dir: {}", e)))?;
    }

    let config_path = data_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        save_settings(data_dir, &Settings::default())?;
    }

    Ok(())
}

/// Save settings to `<data_dir>/config.toml`
///
/// Uses atomic write (temp file + rename).
pub fn save_settings(data_dir: &Path, settings: &Settings) -> Result<()> {
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| Error::config(format!("Failed to create data dir: {}", e)))?;
    }

    let config_path = data_dir.join(CONFIG_FILENAME);
    let temp_path = data_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> &'static str {
    "# AgriHub Configuration\n\
     # All fields are optional; delete a line to return to its default.\n\n"
}
