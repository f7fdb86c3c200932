use crate::RecordValue;

use bio_core::{MediaItem, ProfileRecord, RecordName, ShopItem, SpotlightItem, StickerRecord};

/// The complete set of records shown on one profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecords {
    pub profile: ProfileRecord,
    pub spotlight: Vec<SpotlightItem>,
    pub media: Vec<MediaItem>,
    pub shop: Vec<ShopItem>,
    pub sticker: StickerRecord,
}

impl ProfileRecords {
    /// Copies one record out as a tagged value.
    pub fn value(&self, record: RecordName) -> RecordValue {
        match record {
            RecordName::Profile => RecordValue::Profile(self.profile.clone()),
            RecordName::Spotlight => RecordValue::Spotlight(self.spotlight.clone()),
            RecordName::Media => RecordValue::Media(self.media.clone()),
            RecordName::Shop => RecordValue::Shop(self.shop.clone()),
            RecordName::Sticker => RecordValue::Sticker(self.sticker.clone()),
        }
    }

    /// Replaces one record with `value`.
    pub fn set(&mut self, value: RecordValue) {
        match value {
            RecordValue::Profile(v) => self.profile = v,
            RecordValue::Spotlight(v) => self.spotlight = v,
            RecordValue::Media(v) => self.media = v,
            RecordValue::Shop(v) => self.shop = v,
            RecordValue::Sticker(v) => self.sticker = v,
        }
    }
}
