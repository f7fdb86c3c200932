use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] bio_config::ConfigError),

    #[error("Invalid identity: {0}")]
    Identity(#[from] bio_core::CoreError),

    #[error("Store error: {0}")]
    Store(#[from] bio_store::StoreError),

    #[error("{0}")]
    Editor(#[from] bio_editor::EditorError),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// User-facing hint for errors that carry one.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Store(e) => Some(e.recovery_hint()),
            Self::Editor(e) => Some(e.recovery_hint()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
