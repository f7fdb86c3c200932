use crate::item_commands::{MediaCommands, ShopCommands, SpotlightCommands};
use crate::link_commands::LinkCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the profile page records
    Show,

    /// Edit profile text fields
    Edit {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Title shown under the name
        #[arg(long)]
        title: Option<String>,

        /// Short biography
        #[arg(long)]
        bio: Option<String>,

        /// Profile image reference
        #[arg(long)]
        image: Option<String>,

        /// Wallet address
        #[arg(long)]
        wallet: Option<String>,

        /// Show the wallet address on the page
        #[arg(long)]
        show_wallet: Option<bool>,

        /// Bitcoin address
        #[arg(long)]
        btc: Option<String>,

        /// Show the bitcoin address on the page
        #[arg(long)]
        show_btc: Option<bool>,
    },

    /// Social link operations
    Link {
        #[command(subcommand)]
        action: LinkCommands,
    },

    /// Show or hide page sections
    Section {
        #[arg(long)]
        spotlight: Option<bool>,

        #[arg(long)]
        media: Option<bool>,

        #[arg(long)]
        shop: Option<bool>,

        #[arg(long)]
        sticker: Option<bool>,
    },

    /// Configure the sticker
    Sticker {
        /// Show the sticker
        #[arg(long)]
        visible: Option<bool>,

        /// Sticker image reference
        #[arg(long)]
        image: Option<String>,
    },

    /// Media item operations
    Media {
        #[command(subcommand)]
        action: MediaCommands,
    },

    /// Spotlight item operations
    Spotlight {
        #[command(subcommand)]
        action: SpotlightCommands,
    },

    /// Shop item operations
    Shop {
        #[command(subcommand)]
        action: ShopCommands,
    },

    /// List identities with stored profiles
    Identities,

    /// Delete stored records
    Reset {
        /// Delete every identity's records, not just the selected one
        #[arg(long)]
        all: bool,
    },
}
