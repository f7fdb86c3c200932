use crate::item_commands::{MediaCommands, SpotlightCommands};
use crate::link_commands::LinkCommands;
use crate::{CliError, Commands, run};

use bio_core::Identity;
use bio_editor::{EditorError, SessionOptions};
use bio_store::{FileStore, ProfileRepository};

use googletest::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn named(handle: &str) -> Option<Identity> {
    Some(Identity::named(handle).unwrap())
}

fn run_in(dir: &TempDir, identity: Option<Identity>, command: Commands) -> crate::Result<Value> {
    let store = FileStore::open(dir.path()).unwrap();
    run(
        command,
        ProfileRepository::new(store),
        identity,
        SessionOptions::default(),
    )
}

fn edit_name(name: &str) -> Commands {
    Commands::Edit {
        name: Some(name.to_string()),
        title: None,
        bio: None,
        image: None,
        wallet: None,
        show_wallet: None,
        btc: None,
        show_btc: None,
    }
}

#[test]
fn given_empty_store_when_show_run_then_example_page_returned() {
    // Given
    let dir = TempDir::new().unwrap();

    // When
    let page = run_in(&dir, None, Commands::Show).unwrap();

    // Then
    assert_that!(page["identity"].as_str(), some(eq("default")));
    assert_that!(page["firstVisit"].as_bool(), some(eq(true)));
    assert_that!(page["mode"].as_str(), some(eq("view")));
    assert!(!page["spotlight"].as_array().unwrap().is_empty());
}

#[test]
fn given_edit_when_shown_again_then_change_persisted() {
    // Given
    let dir = TempDir::new().unwrap();
    run_in(&dir, named("abc123"), edit_name("Jane")).unwrap();

    // When
    let page = run_in(&dir, named("abc123"), Commands::Show).unwrap();

    // Then
    assert_that!(page["firstVisit"].as_bool(), some(eq(false)));
    assert_that!(page["profile"]["displayName"].as_str(), some(eq("Jane")));
    assert_that!(page["profile"]["hasBeenEdited"].as_bool(), some(eq(true)));
}

#[test]
fn given_link_added_twice_for_platform_when_shown_then_single_updated_link() {
    let dir = TempDir::new().unwrap();
    for url in ["https://x.com/old", "https://x.com/new"] {
        run_in(
            &dir,
            named("abc123"),
            Commands::Link {
                action: LinkCommands::Add {
                    platform: "x".to_string(),
                    url: url.to_string(),
                },
            },
        )
        .unwrap();
    }

    let page = run_in(&dir, named("abc123"), Commands::Show).unwrap();

    let links: Vec<&Value> = page["profile"]["socialLinks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|l| l["platform"] == "x")
        .collect();
    assert_that!(links.len(), eq(1));
    assert_that!(links[0]["url"].as_str(), some(eq("https://x.com/new")));
}

#[test]
fn given_unknown_platform_when_link_removed_then_invalid_argument() {
    let dir = TempDir::new().unwrap();

    let result = run_in(
        &dir,
        named("abc123"),
        Commands::Link {
            action: LinkCommands::Remove {
                platform: "myspace".to_string(),
            },
        },
    );

    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn given_unsupported_media_url_when_added_then_issue_reported_and_item_saved() {
    // Given
    let dir = TempDir::new().unwrap();

    // When
    let page = run_in(
        &dir,
        named("abc123"),
        Commands::Media {
            action: MediaCommands::Add {
                title: "Page".to_string(),
                url: "https://example.com/page".to_string(),
                description: None,
            },
        },
    )
    .unwrap();

    // Then
    assert_that!(page["issues"].as_array().map(Vec::len), some(eq(1)));
    let media = page["media"].as_array().unwrap();
    assert!(media.iter().any(|m| m["sourceUrl"] == "https://example.com/page"));
}

#[test]
fn given_spotlight_item_when_removed_by_id_then_gone() {
    // Given
    let dir = TempDir::new().unwrap();
    let page = run_in(&dir, named("abc123"), Commands::Show).unwrap();
    let id = page["spotlight"][0]["id"].as_str().unwrap().to_string();

    // When
    let page = run_in(
        &dir,
        named("abc123"),
        Commands::Spotlight {
            action: SpotlightCommands::Remove { id: id.clone() },
        },
    )
    .unwrap();

    // Then
    let spotlight = page["spotlight"].as_array().unwrap();
    assert!(spotlight.iter().all(|s| s["id"] != id.as_str()));
}

#[test]
fn given_malformed_id_when_removed_then_invalid_argument() {
    let dir = TempDir::new().unwrap();

    let result = run_in(
        &dir,
        None,
        Commands::Spotlight {
            action: SpotlightCommands::Remove {
                id: "not-a-uuid".to_string(),
            },
        },
    );

    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn given_profiles_for_two_identities_when_listed_then_both_returned() {
    // Given
    let dir = TempDir::new().unwrap();
    run_in(&dir, named("bob"), edit_name("Bob")).unwrap();
    run_in(&dir, named("alice"), edit_name("Alice")).unwrap();

    // When
    let listing = run_in(&dir, named("alice"), Commands::Identities).unwrap();

    // Then
    assert_that!(listing["active"].as_str(), some(eq("alice")));
    assert_eq!(listing["stored"], serde_json::json!(["alice", "bob"]));
}

#[test]
fn given_active_identity_without_profile_when_listed_then_known_but_not_stored() {
    // Given
    let dir = TempDir::new().unwrap();
    run_in(&dir, named("alice"), edit_name("Alice")).unwrap();

    // When
    let listing = run_in(&dir, named("carol"), Commands::Identities).unwrap();

    // Then
    assert_that!(listing["active"].as_str(), some(eq("carol")));
    assert_eq!(listing["stored"], serde_json::json!(["alice"]));
    assert_eq!(listing["known"], serde_json::json!(["alice", "carol"]));
}

#[test]
fn given_stored_profiles_when_reset_all_then_identities_empty() {
    let dir = TempDir::new().unwrap();
    run_in(&dir, named("alice"), edit_name("Alice")).unwrap();

    let reset = run_in(&dir, None, Commands::Reset { all: true }).unwrap();
    let listing = run_in(&dir, None, Commands::Identities).unwrap();

    assert!(reset["removed"].as_u64().unwrap() >= 5);
    assert_that!(listing["stored"].as_array().map(Vec::len), some(eq(0)));
}

#[test]
fn given_edited_identity_when_reset_then_example_content_returns() {
    let dir = TempDir::new().unwrap();
    run_in(&dir, named("alice"), edit_name("Alice")).unwrap();

    run_in(&dir, named("alice"), Commands::Reset { all: false }).unwrap();
    let page = run_in(&dir, named("alice"), Commands::Show).unwrap();

    assert_that!(page["firstVisit"].as_bool(), some(eq(true)));
}

#[test]
fn given_save_error_when_converted_then_hint_available() {
    let err = CliError::from(EditorError::save_failed(Vec::new()));

    assert_that!(err.recovery_hint(), some(anything()));
}
