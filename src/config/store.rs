use std::path::Path;
use std::sync::{PoisonError, RwLock};

use crate::config::schema::Settings;
use crate::config::{describe, loader};

/// Holder for the active configuration snapshot
///
/// Readers copy the snapshot out; writers replace it wholesale, so a reader
/// never observes a half-merged configuration.
#[derive(Debug)]
pub struct SettingsStore {
    current: RwLock<Settings>,
}

impl SettingsStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: RwLock::new(Settings::DEFAULT),
        }
    }

    /// Current snapshot
    #[must_use]
    pub fn get(&self) -> Settings {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish `settings` as the new snapshot
    pub fn replace(&self, settings: Settings) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = settings;
    }

    /// Restore the compiled-in defaults
    pub fn reset(&self) {
        self.replace(Settings::DEFAULT);
    }

    /// Reset to defaults, then overlay the fields read from `path`
    ///
    /// Never fails: a missing, unreadable or malformed file is logged at
    /// error level and leaves the store at its defaults.
    pub fn load(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.reset();

        tracing::debug!("Loading configuration from {}", path.display());
        match loader::try_load(path) {
            Ok(settings) => {
                self.replace(settings);
                tracing::debug!("Loaded configuration: {settings:?}");
            }
            Err(e) => tracing::error!("{e}, falling back to defaults"),
        }
    }

    /// Log the current snapshot
    pub fn describe(&self) {
        describe::log(&self.get());
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
