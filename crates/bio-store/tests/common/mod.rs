#![allow(dead_code)]

use bio_core::{
    Identity, MediaItem, ProfileRecord, ShopItem, SpotlightItem, StorageKeySet, resolve,
};
use bio_store::{KeyValueStore, MemoryStore, ProfileRepository, Result as StoreResult, StoreError};

/// Creates a repository over an empty in-memory store
pub fn create_test_repository() -> ProfileRepository<MemoryStore> {
    ProfileRepository::new(MemoryStore::new())
}

/// Resolves the key set for a named identity
pub fn keys_for(handle: &str) -> StorageKeySet {
    resolve(&Identity::named(handle).unwrap())
}

/// Creates an edited profile with the given display name
pub fn create_edited_profile(name: &str) -> ProfileRecord {
    let mut profile = ProfileRecord::default();
    profile.display_name = name.to_string();
    profile.mark_edited();
    profile
}

pub fn create_test_spotlight(title: &str) -> SpotlightItem {
    SpotlightItem::new(title, "https://example.com/spotlight")
}

pub fn create_test_media(url: &str) -> MediaItem {
    MediaItem::new("Test media", url)
}

pub fn create_test_shop_item(title: &str) -> ShopItem {
    ShopItem::new(title, "https://example.com/shop")
}

/// In-memory store whose reads of one key always fail.
#[derive(Debug, Default)]
pub struct UnreadableKeyStore {
    pub inner: MemoryStore,
    pub unreadable: String,
}

impl UnreadableKeyStore {
    pub fn new(unreadable: &str) -> Self {
        Self {
            inner: MemoryStore::new(),
            unreadable: unreadable.to_string(),
        }
    }
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

/// Backup keys written for `key`, oldest first
pub fn backups_of<S: KeyValueStore>(repo: &ProfileRepository<S>, key: &str) -> Vec<String> {
    let prefix = format!("{key}.corrupted.");
    repo.store()
        .keys()
        .unwrap()
        .into_iter()
        .filter(|k| k.starts_with(&prefix))
        .collect()
}
