use bio_config::EditorConfig;

use std::time::Duration;

const DEFAULT_LOADING_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for a [`crate::ProfileSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Longest the Loading mode may last before [`crate::ProfileSession::tick`] ends it
    pub loading_timeout: Duration,
    /// Show one blank media row when a returning profile has none
    pub top_up_empty_media: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            loading_timeout: DEFAULT_LOADING_TIMEOUT,
            top_up_empty_media: true,
        }
    }
}

impl From<&EditorConfig> for SessionOptions {
    fn from(config: &EditorConfig) -> Self {
        Self {
            loading_timeout: config.loading_timeout(),
            top_up_empty_media: config.top_up_empty_media,
        }
    }
}
