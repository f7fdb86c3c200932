use crate::Cli;
use crate::commands::Commands;
use crate::item_commands::MediaCommands;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from(["bio", "show", "--identity", "abc123", "--pretty"]).unwrap();

    assert!(matches!(cli.command, Commands::Show));
    assert_that!(cli.identity.as_deref(), some(eq("abc123")));
    assert!(cli.pretty);
}

#[test]
fn given_media_add_when_parsed_then_fields_captured() {
    let cli = Cli::try_parse_from([
        "bio",
        "media",
        "add",
        "--title",
        "Talk",
        "--url",
        "https://youtu.be/dQw4w9WgXcQ",
    ])
    .unwrap();

    let Commands::Media {
        action: MediaCommands::Add { title, url, description },
    } = cli.command
    else {
        panic!("expected media add");
    };
    assert_that!(title.as_str(), eq("Talk"));
    assert_that!(url.as_str(), eq("https://youtu.be/dQw4w9WgXcQ"));
    assert_that!(description, none());
}

#[test]
fn given_boolean_flag_value_when_parsed_then_option_set() {
    let cli = Cli::try_parse_from(["bio", "section", "--shop", "false"]).unwrap();

    let Commands::Section { shop, media, .. } = cli.command else {
        panic!("expected section");
    };
    assert_that!(shop, some(eq(false)));
    assert_that!(media, none());
}

#[test]
fn given_missing_required_argument_when_parsed_then_error() {
    let result = Cli::try_parse_from(["bio", "spotlight", "add", "--title", "x"]);

    assert!(result.is_err());
}
