use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOADING_TIMEOUT_MS, DEFAULT_TOP_UP_EMPTY_MEDIA,
    MAX_LOADING_TIMEOUT_MS, MIN_LOADING_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Upper bound on how long the Loading mode may last before it is forced to end
    pub loading_timeout_ms: u64,
    /// Show one blank media row when a returning profile has no media items
    pub top_up_empty_media: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            loading_timeout_ms: DEFAULT_LOADING_TIMEOUT_MS,
            top_up_empty_media: DEFAULT_TOP_UP_EMPTY_MEDIA,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_LOADING_TIMEOUT_MS..=MAX_LOADING_TIMEOUT_MS).contains(&self.loading_timeout_ms) {
            return Err(ConfigError::editor(format!(
                "editor.loading_timeout_ms must be {}-{}, got {}",
                MIN_LOADING_TIMEOUT_MS, MAX_LOADING_TIMEOUT_MS, self.loading_timeout_ms
            )));
        }

        Ok(())
    }

    pub fn loading_timeout(&self) -> Duration {
        Duration::from_millis(self.loading_timeout_ms)
    }
}
