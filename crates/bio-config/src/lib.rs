mod config;
mod editor_config;
mod error;
mod log_level;
mod logging_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use editor_config::EditorConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

pub const CONFIG_DIR_ENV: &str = "BIO_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".bio";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORE_DIRECTORY: &str = "store";
const DEFAULT_QUARANTINE_CORRUPTED: bool = true;

const DEFAULT_LOADING_TIMEOUT_MS: u64 = 5_000;
const MIN_LOADING_TIMEOUT_MS: u64 = 100;
const MAX_LOADING_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_TOP_UP_EMPTY_MEDIA: bool = true;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
