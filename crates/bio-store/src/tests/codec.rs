use crate::{RECORD_VERSION, StoreError, decode, encode, try_decode};

use bio_core::{ProfileRecord, SocialLink, SpotlightItem, StickerRecord};

use googletest::prelude::*;

// =========================================================================
// Encode
// =========================================================================

#[test]
fn given_record_when_encoded_then_wrapped_in_versioned_envelope() {
    // Given
    let sticker = StickerRecord {
        visible: true,
        image_ref: "sticker.png".to_string(),
    };

    // When
    let encoded = encode("k", &sticker).unwrap();

    // Then
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_that!(value["version"].as_u64(), some(eq(RECORD_VERSION)));
    assert_that!(value["data"]["imageRef"].as_str(), some(eq("sticker.png")));
}

#[test]
fn given_same_record_when_encoded_twice_then_identical_strings() {
    let mut profile = ProfileRecord::default();
    profile.social_links.push(SocialLink::new("x", "https://x.com/jane"));

    assert_eq!(encode("k", &profile).unwrap(), encode("k", &profile).unwrap());
}

// =========================================================================
// Decode
// =========================================================================

#[test]
fn given_absent_value_when_decoded_then_fallback() {
    let fallback = StickerRecord {
        visible: true,
        image_ref: "fallback".to_string(),
    };

    let decoded = decode("k", None, fallback.clone());

    assert_that!(decoded, eq(&fallback));
}

#[test]
fn given_invalid_json_when_decoded_then_fallback_without_panic() {
    let decoded: Vec<SpotlightItem> = decode("k", Some("{not json"), Vec::new());

    assert!(decoded.is_empty());
}

#[test]
fn given_wrong_shape_when_try_decoded_then_corrupted_error() {
    let result = try_decode::<Vec<SpotlightItem>>("k", Some(r#"{"version":1,"data":"text"}"#));

    assert!(matches!(result, Err(StoreError::Corrupted { .. })));
}

#[test]
fn given_newer_envelope_version_when_try_decoded_then_unsupported_version() {
    let raw = format!(r#"{{"version":{},"data":{{}}}}"#, RECORD_VERSION + 1);

    let result = try_decode::<StickerRecord>("k", Some(&raw));

    assert!(matches!(
        result,
        Err(StoreError::UnsupportedVersion { version, .. }) if version == RECORD_VERSION + 1
    ));
}

#[test]
fn given_legacy_bare_profile_when_decoded_then_read_without_envelope() {
    // Given: a record written before versioning existed
    let raw = r#"{"displayName":"Jane","bio":"hi","hasBeenEdited":true}"#;

    // When
    let profile: ProfileRecord = decode("k", Some(raw), ProfileRecord::default());

    // Then
    assert_that!(profile.display_name.as_str(), eq("Jane"));
    assert_that!(profile.bio.as_str(), eq("hi"));
    assert_that!(profile.has_been_edited(), eq(true));
}

#[test]
fn given_legacy_bare_array_when_decoded_then_items_returned() {
    let raw = r#"[{"id":"550e8400-e29b-41d4-a716-446655440000","title":"Post"}]"#;

    let items: Vec<SpotlightItem> = decode("k", Some(raw), Vec::new());

    assert_that!(items.len(), eq(1));
    assert_that!(items[0].title.as_str(), eq("Post"));
}

#[test]
fn given_absent_value_when_try_decoded_then_ok_none() {
    let result = try_decode::<StickerRecord>("k", None);

    assert_that!(result, ok(none()));
}
