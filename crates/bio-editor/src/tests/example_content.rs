use crate::example_records;

use std::collections::HashSet;

use bio_core::{MediaClassifier, UrlMediaClassifier};
use googletest::prelude::*;

#[test]
fn given_example_records_when_built_twice_then_identical() {
    assert_that!(example_records(), eq(&example_records()));
}

#[test]
fn given_example_records_when_inspected_then_collections_populated_and_unedited() {
    let records = example_records();

    assert!(!records.spotlight.is_empty());
    assert!(!records.media.is_empty());
    assert!(!records.shop.is_empty());
    assert_that!(records.profile.has_been_edited(), eq(false));
}

#[test]
fn given_example_records_when_ids_collected_then_all_distinct() {
    let records = example_records();
    let ids: Vec<_> = records
        .spotlight
        .iter()
        .map(|i| i.id)
        .chain(records.media.iter().map(|i| i.id))
        .chain(records.shop.iter().map(|i| i.id))
        .collect();

    let unique: HashSet<_> = ids.iter().collect();

    assert_that!(unique.len(), eq(ids.len()));
}

#[test]
fn given_example_media_when_reclassified_then_matches_stored_embed() {
    let classifier = UrlMediaClassifier;

    for item in example_records().media {
        let media_type = classifier.classify_media_url(&item.source_url);
        assert_that!(media_type, eq(item.media_type));
        assert_that!(
            classifier.to_embed_url(&item.source_url, media_type),
            eq(&item.embed_url)
        );
    }
}
