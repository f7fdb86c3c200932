use crate::ProfileFields;

use std::fmt;

use bio_core::{
    MediaItem, RecordName, SectionVisibility, ShopItem, SocialLink, SpotlightItem, StickerRecord,
};
use bio_store::ProfileRecords;

/// What part of the profile an [`Update`] replaces.
///
/// Declaration order is the order dirty targets are flushed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpdateTarget {
    ProfileFields,
    SocialLinks,
    SectionVisibility,
    SpotlightItems,
    MediaItems,
    ShopItems,
    Sticker,
}

impl UpdateTarget {
    pub const ALL: [UpdateTarget; 7] = [
        Self::ProfileFields,
        Self::SocialLinks,
        Self::SectionVisibility,
        Self::SpotlightItems,
        Self::MediaItems,
        Self::ShopItems,
        Self::Sticker,
    ];

    /// The persisted record the target lives in.
    pub fn record(&self) -> RecordName {
        match self {
            Self::ProfileFields | Self::SocialLinks | Self::SectionVisibility => {
                RecordName::Profile
            }
            Self::SpotlightItems => RecordName::Spotlight,
            Self::MediaItems => RecordName::Media,
            Self::ShopItems => RecordName::Shop,
            Self::Sticker => RecordName::Sticker,
        }
    }

    /// Whether applying the target marks the profile as user-edited.
    pub fn marks_edited(&self) -> bool {
        self.record() == RecordName::Profile
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileFields => "profile fields",
            Self::SocialLinks => "social links",
            Self::SectionVisibility => "section visibility",
            Self::SpotlightItems => "spotlight items",
            Self::MediaItems => "media items",
            Self::ShopItems => "shop items",
            Self::Sticker => "sticker",
        }
    }
}

impl fmt::Display for UpdateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whole-value replacement of one [`UpdateTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    ProfileFields(ProfileFields),
    SocialLinks(Vec<SocialLink>),
    SectionVisibility(SectionVisibility),
    SpotlightItems(Vec<SpotlightItem>),
    MediaItems(Vec<MediaItem>),
    ShopItems(Vec<ShopItem>),
    Sticker(StickerRecord),
}

impl Update {
    pub fn target(&self) -> UpdateTarget {
        match self {
            Self::ProfileFields(_) => UpdateTarget::ProfileFields,
            Self::SocialLinks(_) => UpdateTarget::SocialLinks,
            Self::SectionVisibility(_) => UpdateTarget::SectionVisibility,
            Self::SpotlightItems(_) => UpdateTarget::SpotlightItems,
            Self::MediaItems(_) => UpdateTarget::MediaItems,
            Self::ShopItems(_) => UpdateTarget::ShopItems,
            Self::Sticker(_) => UpdateTarget::Sticker,
        }
    }

    /// Reads the current value of `target` out of `records`.
    pub fn snapshot(target: UpdateTarget, records: &ProfileRecords) -> Self {
        match target {
            UpdateTarget::ProfileFields => {
                Self::ProfileFields(ProfileFields::from(&records.profile))
            }
            UpdateTarget::SocialLinks => Self::SocialLinks(records.profile.social_links.clone()),
            UpdateTarget::SectionVisibility => {
                Self::SectionVisibility(records.profile.section_visibility)
            }
            UpdateTarget::SpotlightItems => Self::SpotlightItems(records.spotlight.clone()),
            UpdateTarget::MediaItems => Self::MediaItems(records.media.clone()),
            UpdateTarget::ShopItems => Self::ShopItems(records.shop.clone()),
            UpdateTarget::Sticker => Self::Sticker(records.sticker.clone()),
        }
    }

    /// Writes this value into `records`. Does not touch the edited flag.
    pub fn merge_into(self, records: &mut ProfileRecords) {
        match self {
            Self::ProfileFields(fields) => fields.apply_to(&mut records.profile),
            Self::SocialLinks(links) => records.profile.social_links = links,
            Self::SectionVisibility(visibility) => {
                records.profile.section_visibility = visibility
            }
            Self::SpotlightItems(items) => records.spotlight = items,
            Self::MediaItems(items) => records.media = items,
            Self::ShopItems(items) => records.shop = items,
            Self::Sticker(sticker) => records.sticker = sticker,
        }
    }
}
