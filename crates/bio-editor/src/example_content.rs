//! Example records shown to an identity that has never edited its page.
//!
//! Everything here is fixed, ids included, so seeding the same identity
//! twice writes byte-identical records.

use bio_core::{
    MediaItem, MediaType, ProfileRecord, SectionVisibility, ShopItem, SocialLink, SpotlightItem,
    StickerRecord,
};
use bio_store::ProfileRecords;
use uuid::Uuid;

const SPOTLIGHT_IDS: [u128; 2] = [
    0x5a1e_0000_0000_4000_8000_0000_0000_0001,
    0x5a1e_0000_0000_4000_8000_0000_0000_0002,
];
const MEDIA_IDS: [u128; 2] = [
    0x3ed1_0000_0000_4000_8000_0000_0000_0001,
    0x3ed1_0000_0000_4000_8000_0000_0000_0002,
];
const SHOP_IDS: [u128; 2] = [
    0x5409_0000_0000_4000_8000_0000_0000_0001,
    0x5409_0000_0000_4000_8000_0000_0000_0002,
];

/// The full example record set. The profile is unedited.
pub fn example_records() -> ProfileRecords {
    ProfileRecords {
        profile: example_profile(),
        spotlight: example_spotlight(),
        media: example_media(),
        shop: example_shop(),
        sticker: example_sticker(),
    }
}

pub fn example_profile() -> ProfileRecord {
    let mut profile = ProfileRecord::default();
    profile.display_name = "Your Name".to_string();
    profile.title = "Creator & Collector".to_string();
    profile.bio = "Tell visitors who you are and what you make. \
                   Switch to edit mode to make this page your own."
        .to_string();
    profile.social_links = vec![
        SocialLink::new("twitter", "https://twitter.com/"),
        SocialLink::new("instagram", "https://instagram.com/"),
    ];
    profile.section_visibility = SectionVisibility::default();
    profile
}

pub fn example_spotlight() -> Vec<SpotlightItem> {
    vec![
        SpotlightItem {
            id: Uuid::from_u128(SPOTLIGHT_IDS[0]),
            title: "Latest Drop".to_string(),
            description: "Highlight the project you are most proud of.".to_string(),
            image: String::new(),
            link: "https://example.com/latest".to_string(),
        },
        SpotlightItem {
            id: Uuid::from_u128(SPOTLIGHT_IDS[1]),
            title: "Featured Collaboration".to_string(),
            description: "Point visitors at work you made with others.".to_string(),
            image: String::new(),
            link: "https://example.com/collab".to_string(),
        },
    ]
}

pub fn example_media() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: Uuid::from_u128(MEDIA_IDS[0]),
            title: "Studio Session".to_string(),
            description: "Embed a video from YouTube or Vimeo.".to_string(),
            image: String::new(),
            link: String::new(),
            source_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            media_type: MediaType::Youtube,
            embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
        },
        MediaItem {
            id: Uuid::from_u128(MEDIA_IDS[1]),
            title: "Favourite Track".to_string(),
            description: "Share music from Spotify or SoundCloud.".to_string(),
            image: String::new(),
            link: String::new(),
            source_url: "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC".to_string(),
            media_type: MediaType::Spotify,
            embed_url: "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC".to_string(),
        },
    ]
}

pub fn example_shop() -> Vec<ShopItem> {
    vec![
        ShopItem {
            id: Uuid::from_u128(SHOP_IDS[0]),
            title: "Limited Print".to_string(),
            description: "List something visitors can buy.".to_string(),
            image: String::new(),
            link: "https://example.com/shop/print".to_string(),
            price: "0.05 ETH".to_string(),
        },
        ShopItem {
            id: Uuid::from_u128(SHOP_IDS[1]),
            title: "Digital Edition".to_string(),
            description: "Link to a marketplace listing.".to_string(),
            image: String::new(),
            link: "https://example.com/shop/digital".to_string(),
            price: "0.01 ETH".to_string(),
        },
    ]
}

pub fn example_sticker() -> StickerRecord {
    StickerRecord {
        visible: true,
        image_ref: String::new(),
    }
}
