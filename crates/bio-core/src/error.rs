use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Identity handle must not be empty {location}")]
    EmptyIdentity { location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates EmptyIdentity error at caller location.
    #[track_caller]
    pub fn empty_identity() -> Self {
        Self::EmptyIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
