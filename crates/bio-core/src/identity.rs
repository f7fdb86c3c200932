use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::str::FromStr;

/// Handle used when no wallet is connected.
pub const SENTINEL_HANDLE: &str = "default";

/// The handle used to namespace stored profile data.
///
/// `Sentinel` stands for "no wallet connected" and maps onto the legacy key
/// set; `Named` carries a wallet account handle verbatim. Handles are opaque:
/// no case or whitespace normalisation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Identity {
    #[default]
    Sentinel,
    Named(String),
}

impl Identity {
    /// Builds an identity from a non-empty handle.
    ///
    /// The literal `"default"` resolves to [`Identity::Sentinel`] so the
    /// string form and the variant can never disagree.
    #[track_caller]
    pub fn named(handle: impl Into<String>) -> CoreResult<Self> {
        let handle = handle.into();
        if handle.is_empty() {
            return Err(CoreError::empty_identity());
        }
        if handle == SENTINEL_HANDLE {
            return Ok(Self::Sentinel);
        }
        Ok(Self::Named(handle))
    }

    /// Maps the auth collaborator's active account onto an identity.
    /// A missing or empty handle means no wallet is connected.
    pub fn from_active(handle: Option<&str>) -> Self {
        match handle {
            Some(h) => Self::named(h).unwrap_or_default(),
            None => Self::Sentinel,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sentinel => SENTINEL_HANDLE,
            Self::Named(handle) => handle,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel)
    }
}

impl FromStr for Identity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::named(s)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
