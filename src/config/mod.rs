//! Configuration module for perfkit
//!
//! Reads the upscaling settings from a YAML file into a process-wide
//! [`SettingsStore`]. Every load starts from the compiled-in defaults; a
//! missing or malformed file keeps them, and individual keys that are absent
//! or of the wrong type keep their default value.
//!
//! ```yaml
//! upscaling:
//!   enabled: true
//!   method: nis        # fsr | nis, case-insensitive
//!   renderScale: 0.77
//!   sharpness: 0.7
//!   radius: 0.6
//!   applyMipBias: true
//! debugMode: false
//! ```
//!
//! # Example
//!
//! ```no_run
//! use perfkit::config;
//!
//! config::load_config("perfkit.yml");
//! config::print_current_config();
//! println!("Upscaling enabled: {}", config::settings().upscaling.enabled);
//! ```

pub mod describe;
pub mod loader;
pub mod schema;
pub mod store;

use std::path::{Path, PathBuf};

pub use loader::try_load;
pub use schema::{Settings, UpscaleMethod, UpscaleSettings};
pub use store::SettingsStore;

/// File name looked up when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "perfkit.yml";

static GLOBAL: SettingsStore = SettingsStore::new();

/// The process-wide store
///
/// Written by [`load_config`], normally once at startup; read by the renderer.
#[must_use]
pub fn global() -> &'static SettingsStore {
    &GLOBAL
}

/// Snapshot of the process-wide settings
#[must_use]
pub fn settings() -> Settings {
    GLOBAL.get()
}

/// Reload the process-wide settings from `path`
pub fn load_config(path: impl AsRef<Path>) {
    GLOBAL.load(path);
}

/// Log the process-wide settings
pub fn print_current_config() {
    GLOBAL.describe();
}

/// `<config dir>/perfkit/perfkit.yml`, or `perfkit.yml` in the working directory
/// when the platform has no config directory
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(CONFIG_FILE_NAME),
        |dir| dir.join("perfkit").join(CONFIG_FILE_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_file_name() {
        assert!(default_config_path().ends_with(CONFIG_FILE_NAME));
    }
}
