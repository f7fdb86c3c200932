use crate::{EditMode, UpdateTarget};

use std::panic::Location;

use bio_store::StoreError;
use error_location::ErrorLocation;
use thiserror::Error;

/// One dirty target that could not be written during a save.
#[derive(Debug)]
pub struct FlushFailure {
    pub target: UpdateTarget,
    pub error: Box<EditorError>,
}

impl FlushFailure {
    /// The storage error behind the failure, if it came from the store.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self.error.as_ref() {
            EditorError::Apply { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid mode transition from {from} to {to} {location}")]
    InvalidTransition {
        from: EditMode,
        to: EditMode,
        location: ErrorLocation,
    },

    #[error("Cannot {operation} while in {mode} mode {location}")]
    WrongMode {
        operation: &'static str,
        mode: EditMode,
        location: ErrorLocation,
    },

    #[error("Cannot edit until the profile for {identity} has finished loading {location}")]
    ReloadPending {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Save failed for {} record(s): {} {location}", .failures.len(), summarize(.failures))]
    SaveFailed {
        failures: Vec<FlushFailure>,
        location: ErrorLocation,
    },

    #[error("Failed to apply {target} update: {source} {location}")]
    Apply {
        target: UpdateTarget,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

fn summarize(failures: &[FlushFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.target, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

impl EditorError {
    /// Whether repeating the operation may succeed without other changes.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::SaveFailed { failures, .. } => failures.iter().all(|f| f.error.is_transient()),
            Self::Apply { source, .. } => source.is_transient(),
            Self::ReloadPending { .. } => true,
            Self::InvalidTransition { .. } | Self::WrongMode { .. } => false,
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } | Self::WrongMode { .. } => {
                "That action is not available right now."
            }
            Self::ReloadPending { .. } => "The profile is still loading. Try again shortly.",
            Self::SaveFailed { failures, .. } => failures
                .first()
                .map_or("Your changes were not saved.", |f| f.error.recovery_hint()),
            Self::Apply { source, .. } => source.recovery_hint(),
        }
    }

    /// Creates InvalidTransition error at caller location.
    #[track_caller]
    pub fn invalid_transition(from: EditMode, to: EditMode) -> Self {
        Self::InvalidTransition {
            from,
            to,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates WrongMode error at caller location.
    #[track_caller]
    pub fn wrong_mode(operation: &'static str, mode: EditMode) -> Self {
        Self::WrongMode {
            operation,
            mode,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ReloadPending error at caller location.
    #[track_caller]
    pub fn reload_pending(identity: impl Into<String>) -> Self {
        Self::ReloadPending {
            identity: identity.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SaveFailed error at caller location.
    #[track_caller]
    pub fn save_failed(failures: Vec<FlushFailure>) -> Self {
        Self::SaveFailed {
            failures,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Apply error at caller location.
    #[track_caller]
    pub fn apply(target: UpdateTarget, source: StoreError) -> Self {
        Self::Apply {
            target,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
