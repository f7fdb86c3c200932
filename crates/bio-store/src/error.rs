use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the record store and codec.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read record {key}: {message} {location}")]
    Read {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Record {key} is corrupted: {message} {location}")]
    Corrupted {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Record {key} has unsupported version {version} {location}")]
    UnsupportedVersion {
        key: String,
        version: u64,
        location: ErrorLocation,
    },

    #[error("Failed to write record {key}: {message} {location}")]
    Write {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, {limit} allowed {location}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
        location: ErrorLocation,
    },

    #[error("Failed to serialize record {key}: {source} {location}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Store IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Whether retrying the same write may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Write { .. }
                | Self::QuotaExceeded { .. }
                | Self::Io { .. }
                | Self::AtomicRename { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Io { .. } => {
                "Unable to access profile storage. \
                   Check file permissions and try again."
            }
            Self::Corrupted { .. } | Self::UnsupportedVersion { .. } => {
                "A stored profile record could not be read. \
                   A copy was kept and defaults are shown instead."
            }
            Self::Write { .. } | Self::AtomicRename { .. } => {
                "Your changes were not saved. \
                   Check disk space and try saving again."
            }
            Self::QuotaExceeded { .. } => {
                "Storage is full. \
                   Remove some items or images and try saving again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing profile data. \
                   Please report this issue."
            }
        }
    }

    /// Creates Read error at caller location.
    #[track_caller]
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Corrupted error at caller location.
    #[track_caller]
    pub fn corrupted(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupted {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnsupportedVersion error at caller location.
    #[track_caller]
    pub fn unsupported_version(key: impl Into<String>, version: u64) -> Self {
        Self::UnsupportedVersion {
            key: key.into(),
            version,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Write error at caller location.
    #[track_caller]
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates QuotaExceeded error at caller location.
    #[track_caller]
    pub fn quota_exceeded(key: impl Into<String>, needed: usize, limit: usize) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            needed,
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Serialization error at caller location.
    #[track_caller]
    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            key: key.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Io error at caller location.
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
