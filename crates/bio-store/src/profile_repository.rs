use crate::{KeyValueStore, LoadResult, RecordValue, Result as StoreResult, StoreError, codec};

use bio_core::{
    Identity, KEY_NAMESPACE, LEGACY_KEYS, ProfileRecord, RecordName, StorageKeySet,
    identity_for_profile_key,
};

use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const QUARANTINE_MARKER: &str = ".corrupted.";

/// Reads and writes the five profile records of an identity.
///
/// Every storage failure stops here: `load` always yields a complete set of
/// records, and `save` reports write failures as [`StoreError`] values.
pub struct ProfileRepository<S: KeyValueStore> {
    store: S,
    quarantine_corrupted: bool,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            quarantine_corrupted: true,
        }
    }

    /// Whether undecodable records are copied aside before falling back.
    pub fn with_quarantine(mut self, enabled: bool) -> Self {
        self.quarantine_corrupted = enabled;
        self
    }

    pub fn quarantines_corrupted(&self) -> bool {
        self.quarantine_corrupted
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Loads every record under `keys`, substituting defaults where needed.
    pub fn load(&mut self, keys: &StorageKeySet) -> LoadResult {
        let mut result = LoadResult::default();

        result.records.profile = self.load_record(keys, RecordName::Profile, &mut result);
        result.records.spotlight = self.load_record(keys, RecordName::Spotlight, &mut result);
        result.records.media = self.load_record(keys, RecordName::Media, &mut result);
        result.records.shop = self.load_record(keys, RecordName::Shop, &mut result);
        result.records.sticker = self.load_record(keys, RecordName::Sticker, &mut result);

        debug!(
            "Loaded records for {} (missing {:?}, corrupted {:?}, unavailable {:?})",
            keys.profile(),
            result.missing,
            result.corrupted,
            result.unavailable
        );
        result
    }

    /// Loads only the profile record for a read-modify-write.
    ///
    /// Missing profiles and corrupted profiles that were backed up yield the
    /// default. Any other failure is returned, so the caller never writes a
    /// default over a profile it could not see.
    pub fn load_profile(&mut self, keys: &StorageKeySet) -> StoreResult<ProfileRecord> {
        let key = keys.profile();

        let raw = match self.store.get(key) {
            Ok(raw) => raw,
            Err(e @ StoreError::Corrupted { .. }) => {
                return if self.quarantine(key, None) {
                    Ok(ProfileRecord::default())
                } else {
                    Err(e)
                };
            }
            Err(e) => return Err(e),
        };

        match codec::try_decode(key, raw.as_deref()) {
            Ok(profile) => Ok(profile.unwrap_or_default()),
            Err(e) => {
                if self.quarantine(key, raw.as_deref()) {
                    warn!("Profile {key} is unreadable, continuing from defaults: {e}");
                    Ok(ProfileRecord::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    fn load_record<T: DeserializeOwned + Default>(
        &mut self,
        keys: &StorageKeySet,
        record: RecordName,
        result: &mut LoadResult,
    ) -> T {
        let key = keys.get(record);

        let raw = match self.store.get(key) {
            Ok(raw) => raw,
            Err(e @ StoreError::Corrupted { .. }) => {
                warn!("Record {key} is unreadable, using default: {e}");
                result.corrupted.push(record);
                self.quarantine(key, None);
                return T::default();
            }
            Err(e) => {
                warn!("Record {key} unavailable, using default: {e}");
                result.unavailable.push(record);
                return T::default();
            }
        };

        match codec::try_decode(key, raw.as_deref()) {
            Ok(Some(value)) => value,
            Ok(None) => {
                result.missing.push(record);
                T::default()
            }
            Err(e) => {
                warn!("Record {key} is unreadable, using default: {e}");
                result.corrupted.push(record);
                self.quarantine(key, raw.as_deref());
                T::default()
            }
        }
    }

    /// Copies a corrupted record aside. Returns whether a copy of the current
    /// value now exists.
    ///
    /// `raw` is the value as text, or `None` when the store could not return
    /// it as text.
    fn quarantine(&mut self, key: &str, raw: Option<&str>) -> bool {
        if !self.quarantine_corrupted {
            return false;
        }

        if self.already_quarantined(key, raw) {
            debug!("Corrupted record {key} already backed up");
            return true;
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_key = format!("{key}{QUARANTINE_MARKER}{timestamp}");

        match self.store.copy(key, &backup_key) {
            Ok(()) => {
                warn!("Backed up corrupted record {key} to {backup_key}");
                true
            }
            Err(e) => {
                warn!("Failed to back up corrupted record {key}: {e}");
                false
            }
        }
    }

    /// Whether the newest backup of `key` already holds `raw`.
    ///
    /// Values that are not text cannot be compared, so one such backup
    /// stands for all of them.
    fn already_quarantined(&self, key: &str, raw: Option<&str>) -> bool {
        let prefix = format!("{key}{QUARANTINE_MARKER}");
        let latest = match self.store.keys() {
            Ok(keys) => keys.into_iter().filter(|k| k.starts_with(&prefix)).max(),
            Err(e) => {
                warn!("Could not list backups of {key}: {e}");
                None
            }
        };
        let Some(latest) = latest else {
            return false;
        };

        match (self.store.get(&latest), raw) {
            (Ok(Some(previous)), Some(raw)) => previous == raw,
            (Err(StoreError::Corrupted { .. }), None) => true,
            _ => false,
        }
    }

    /// Persists one record under its key in `keys`.
    pub fn save(&mut self, keys: &StorageKeySet, value: &RecordValue) -> StoreResult<()> {
        let key = keys.get(value.record_name());

        let encoded = match value {
            RecordValue::Profile(v) => codec::encode(key, v),
            RecordValue::Spotlight(v) => codec::encode(key, v),
            RecordValue::Media(v) => codec::encode(key, v),
            RecordValue::Shop(v) => codec::encode(key, v),
            RecordValue::Sticker(v) => codec::encode(key, v),
        }?;

        self.store.set(key, &encoded).inspect_err(|e| {
            error!("Failed to save record {key}: {e}");
        })?;

        debug!("Saved record {key} ({} bytes)", encoded.len());
        Ok(())
    }

    /// Whether a value is stored under the profile key, readable or not.
    pub fn has_profile(&self, keys: &StorageKeySet) -> bool {
        matches!(self.store.get(keys.profile()), Ok(Some(_)))
    }

    /// Removes one identity's records.
    pub fn reset_identity(&mut self, keys: &StorageKeySet) -> StoreResult<()> {
        for (_, key) in keys.iter() {
            self.store.remove(key)?;
        }
        info!("Reset records for {}", keys.profile());
        Ok(())
    }

    /// Removes every namespaced key plus the legacy keys, including
    /// quarantined copies. Returns the number of keys removed.
    pub fn reset_all(&mut self) -> StoreResult<usize> {
        let prefix = format!("{KEY_NAMESPACE}:");
        let doomed: Vec<String> = self
            .store
            .keys()?
            .into_iter()
            .filter(|key| {
                key.starts_with(&prefix)
                    || LEGACY_KEYS.iter().any(|legacy| {
                        key == legacy
                            || key
                                .strip_prefix(legacy)
                                .is_some_and(|rest| rest.starts_with(QUARANTINE_MARKER))
                    })
            })
            .collect();

        for key in &doomed {
            self.store.remove(key)?;
        }

        info!("Reset all profile records ({} keys)", doomed.len());
        Ok(doomed.len())
    }

    /// Named identities that have a profile record in the store.
    pub fn stored_identities(&self) -> StoreResult<Vec<Identity>> {
        let keys = self.store.keys()?;
        Ok(keys
            .iter()
            .filter_map(|key| identity_for_profile_key(key))
            .collect())
    }
}

