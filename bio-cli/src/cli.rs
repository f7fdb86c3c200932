use crate::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bio")]
#[command(about = "Link-in-bio profile store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Wallet account handle (omit for the default, unconnected profile)
    #[arg(long, global = true)]
    pub identity: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
