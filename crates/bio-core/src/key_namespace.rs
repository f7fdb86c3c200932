use crate::Identity;

use std::fmt;

/// Prefix shared by every key written for a named identity.
pub const KEY_NAMESPACE: &str = "linkbio";

/// Keys used before per-identity namespacing existed. The sentinel identity
/// keeps reading and writing these so older data stays visible.
pub const LEGACY_KEYS: [&str; 5] = [
    "userProfile",
    "spotlightItems",
    "mediaItems",
    "shopItems",
    "stickerSettings",
];

/// The five independently persisted records of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordName {
    Profile,
    Spotlight,
    Media,
    Shop,
    Sticker,
}

impl RecordName {
    pub const ALL: [RecordName; 5] = [
        Self::Profile,
        Self::Spotlight,
        Self::Media,
        Self::Shop,
        Self::Sticker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Spotlight => "spotlight",
            Self::Media => "media",
            Self::Shop => "shop",
            Self::Sticker => "sticker",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Profile => 0,
            Self::Spotlight => 1,
            Self::Media => 2,
            Self::Shop => 3,
            Self::Sticker => 4,
        }
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage keys for one identity's five records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeySet {
    keys: [String; 5],
}

impl StorageKeySet {
    pub fn get(&self, record: RecordName) -> &str {
        &self.keys[record.index()]
    }

    pub fn profile(&self) -> &str {
        self.get(RecordName::Profile)
    }

    pub fn spotlight(&self) -> &str {
        self.get(RecordName::Spotlight)
    }

    pub fn media(&self) -> &str {
        self.get(RecordName::Media)
    }

    pub fn shop(&self) -> &str {
        self.get(RecordName::Shop)
    }

    pub fn sticker(&self) -> &str {
        self.get(RecordName::Sticker)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordName, &str)> {
        RecordName::ALL.into_iter().map(|r| (r, self.get(r)))
    }
}

/// Computes the key set for an identity.
///
/// Named identities get `linkbio:<handle>:<record>`; the handle is embedded
/// verbatim. Record names never contain `:`, so the final segment always
/// identifies the record and the prefix identifies the handle.
pub fn resolve(identity: &Identity) -> StorageKeySet {
    match identity {
        Identity::Sentinel => StorageKeySet {
            keys: LEGACY_KEYS.map(String::from),
        },
        Identity::Named(handle) => StorageKeySet {
            keys: RecordName::ALL.map(|r| format!("{KEY_NAMESPACE}:{handle}:{}", r.as_str())),
        },
    }
}

/// Inverse of [`resolve`] for profile keys. Returns the named identity that
/// owns `key`, or `None` when `key` is not a namespaced profile key.
pub fn identity_for_profile_key(key: &str) -> Option<Identity> {
    let handle = key
        .strip_prefix(KEY_NAMESPACE)?
        .strip_prefix(':')?
        .strip_suffix(RecordName::Profile.as_str())?
        .strip_suffix(':')?;

    match Identity::named(handle) {
        Ok(identity @ Identity::Named(_)) => Some(identity),
        _ => None,
    }
}
