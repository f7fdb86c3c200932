use bio_core::{MediaItem, ProfileRecord, RecordName, ShopItem, SpotlightItem, StickerRecord};

/// One record's worth of data, tagged with the record it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    Profile(ProfileRecord),
    Spotlight(Vec<SpotlightItem>),
    Media(Vec<MediaItem>),
    Shop(Vec<ShopItem>),
    Sticker(StickerRecord),
}

impl RecordValue {
    pub fn record_name(&self) -> RecordName {
        match self {
            Self::Profile(_) => RecordName::Profile,
            Self::Spotlight(_) => RecordName::Spotlight,
            Self::Media(_) => RecordName::Media,
            Self::Shop(_) => RecordName::Shop,
            Self::Sticker(_) => RecordName::Sticker,
        }
    }
}
