pub mod error;
pub mod identity;
pub mod key_namespace;
pub mod media;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use identity::{Identity, SENTINEL_HANDLE};
pub use key_namespace::{
    KEY_NAMESPACE, LEGACY_KEYS, RecordName, StorageKeySet, identity_for_profile_key, resolve,
};
pub use media::media_classifier::MediaClassifier;
pub use media::url_media_classifier::UrlMediaClassifier;
pub use models::media_item::MediaItem;
pub use models::media_type::MediaType;
pub use models::profile_record::ProfileRecord;
pub use models::section_visibility::SectionVisibility;
pub use models::shop_item::ShopItem;
pub use models::social_link::SocialLink;
pub use models::spotlight_item::SpotlightItem;
pub use models::sticker_record::StickerRecord;
