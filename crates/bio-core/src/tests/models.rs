use crate::{MediaItem, MediaType, ProfileRecord, SectionVisibility, StickerRecord};

use googletest::prelude::*;

#[test]
fn given_default_profile_when_created_then_not_edited_and_sections_visible() {
    let profile = ProfileRecord::default();

    assert_that!(profile.has_been_edited(), eq(false));
    assert_that!(profile.section_visibility, eq(SectionVisibility::default()));
    assert!(profile.section_visibility.spotlight);
    assert!(profile.social_links.is_empty());
}

#[test]
fn given_profile_when_marked_edited_then_stays_edited() {
    let mut profile = ProfileRecord::default();

    profile.mark_edited();
    profile.mark_edited();

    assert_that!(profile.has_been_edited(), eq(true));
}

#[test]
fn given_profile_when_serialized_then_uses_camel_case_keys() {
    let mut profile = ProfileRecord::default();
    profile.display_name = "Jane".to_string();
    profile.mark_edited();

    let json = serde_json::to_string(&profile).unwrap();

    assert!(json.contains("\"displayName\":\"Jane\""));
    assert!(json.contains("\"hasBeenEdited\":true"));
    assert!(json.contains("\"sectionVisibility\""));
}

#[test]
fn given_partial_profile_json_when_deserialized_then_missing_fields_default() {
    let json = r#"{"displayName":"Jane","hasBeenEdited":true}"#;

    let profile: ProfileRecord = serde_json::from_str(json).unwrap();

    assert_that!(profile.display_name.as_str(), eq("Jane"));
    assert_that!(profile.has_been_edited(), eq(true));
    assert_that!(profile.section_visibility, eq(SectionVisibility::default()));
}

#[test]
fn given_unknown_media_type_string_when_deserialized_then_unknown() {
    let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","mediaType":"tiktok"}"#;

    let item: MediaItem = serde_json::from_str(json).unwrap();

    assert_that!(item.media_type, eq(MediaType::Unknown));
}

#[test]
fn given_new_items_when_created_then_ids_are_unique() {
    let a = MediaItem::new("a", "");
    let b = MediaItem::new("a", "");

    assert_ne!(a.id, b.id);
    assert!(a.is_blank());
}

#[test]
fn given_default_sticker_when_created_then_hidden() {
    let sticker = StickerRecord::default();

    assert_that!(sticker.visible, eq(false));
    assert!(sticker.image_ref.is_empty());
}
