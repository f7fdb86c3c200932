//! String encoding of persisted records.
//!
//! Records are written as `{"version":1,"data":<record>}`. Records written
//! before the envelope existed are bare JSON values and still decode.
//! Decoding never fails outward: [`decode`] logs and substitutes the caller's
//! fallback, while [`try_decode`] exposes the reason for callers that need it.

use crate::{Result as StoreResult, StoreError};

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope version written by [`encode`].
pub const RECORD_VERSION: u64 = 1;

const VERSION_FIELD: &str = "version";
const DATA_FIELD: &str = "data";

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u64,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    version: u64,
    data: Value,
}

/// Serializes `value` into its canonical stored form.
pub fn encode<T: Serialize>(key: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string(&EnvelopeRef {
        version: RECORD_VERSION,
        data: value,
    })
    .map_err(|e| {
        error!("Failed to encode record {key}: {e}");
        StoreError::serialization(key, e)
    })
}

/// Decodes `raw`, returning `fallback` when it is absent or unreadable.
pub fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>, fallback: T) -> T {
    match try_decode(key, raw) {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(e) => {
            warn!("Using fallback for record {key}: {e}");
            fallback
        }
    }
}

/// Decodes `raw`. `Ok(None)` means the record is absent.
pub fn try_decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> StoreResult<Option<T>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: Value =
        serde_json::from_str(raw).map_err(|e| StoreError::corrupted(key, e.to_string()))?;

    let data = if is_envelope(&value) {
        let envelope: Envelope = serde_json::from_value(value)
            .map_err(|e| StoreError::corrupted(key, e.to_string()))?;
        if envelope.version > RECORD_VERSION {
            return Err(StoreError::unsupported_version(key, envelope.version));
        }
        envelope.data
    } else {
        value
    };

    serde_json::from_value(data)
        .map(Some)
        .map_err(|e| StoreError::corrupted(key, e.to_string()))
}

fn is_envelope(value: &Value) -> bool {
    match value.as_object() {
        Some(map) => {
            map.len() == 2
                && map.get(VERSION_FIELD).is_some_and(Value::is_u64)
                && map.contains_key(DATA_FIELD)
        }
        None => false,
    }
}
