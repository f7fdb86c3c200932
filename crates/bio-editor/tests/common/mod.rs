#![allow(dead_code)]

use bio_core::Identity;
use bio_editor::{ProfileSession, SessionOptions};
use bio_store::{KeyValueStore, MemoryStore, ProfileRepository, Result as StoreResult, StoreError};

use std::time::Duration;

pub fn named(handle: &str) -> Identity {
    Identity::named(handle).unwrap()
}

pub fn test_options() -> SessionOptions {
    SessionOptions {
        loading_timeout: Duration::from_millis(250),
        top_up_empty_media: true,
    }
}

/// Opens a session over an empty in-memory store
pub fn open_session(active: Option<Identity>) -> ProfileSession<MemoryStore> {
    ProfileSession::open(
        ProfileRepository::new(MemoryStore::new()),
        active,
        test_options(),
    )
}

/// Opens a session over an existing store
pub fn reopen(store: MemoryStore, active: Option<Identity>) -> ProfileSession<MemoryStore> {
    ProfileSession::open(ProfileRepository::new(store), active, test_options())
}

/// Wraps a memory store so that reads of one key fail.
pub struct UnreadableKeyStore {
    pub inner: MemoryStore,
    pub unreadable: String,
}

impl KeyValueStore for UnreadableKeyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if key == self.unreadable {
            return Err(StoreError::read(key, "device busy"));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        self.inner.keys()
    }
}
