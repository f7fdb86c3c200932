use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_QUARANTINE_CORRUPTED, DEFAULT_STORE_DIRECTORY,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one file per record key, relative to the config directory
    pub dir: String,
    /// Keep a copy of undecodable records before falling back to defaults
    pub quarantine_corrupted: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORE_DIRECTORY),
            quarantine_corrupted: DEFAULT_QUARANTINE_CORRUPTED,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::store("store.dir must not be empty"));
        }

        // Keep the store inside the config dir
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::store(
                "store.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
