//! bio - link-in-bio profile store CLI
//!
//! # Examples
//!
//! ```bash
//! # Show the default profile (example content on first run)
//! bio show --pretty
//!
//! # Edit a wallet's profile
//! bio --identity 0xabc123 edit --name "Jane" --bio "Builder"
//!
//! # Add a media item
//! bio --identity 0xabc123 media add --title "Talk" --url https://youtu.be/dQw4w9WgXcQ
//! ```

use bio_cli::{Cli, CliError, logger};
use bio_config::Config;
use bio_core::Identity;
use bio_editor::SessionOptions;
use bio_store::{FileStore, ProfileRepository};

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = execute(cli.command, cli.identity.as_deref());

    match result {
        Ok(value) => print_json(&value, cli.pretty),
        Err(e) => {
            error!("Command failed: {e}");
            eprintln!("Error: {e}");
            if let Some(hint) = e.recovery_hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(command: bio_cli::Commands, identity: Option<&str>) -> Result<Value, CliError> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let identity = identity.map(Identity::named).transpose()?;

    let store = FileStore::open(config.store_path()?)?;
    let repo = ProfileRepository::new(store).with_quarantine(config.store.quarantine_corrupted);

    bio_cli::run(
        command,
        repo,
        identity,
        SessionOptions::from(&config.editor),
    )
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            ExitCode::FAILURE
        }
    }
}
