use clap::Subcommand;

#[derive(Subcommand)]
pub enum SpotlightCommands {
    /// Append a spotlight item
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        link: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Remove a spotlight item by ID
    Remove {
        /// Item ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum MediaCommands {
    /// Append a media item; the URL is classified for embedding
    Add {
        #[arg(long)]
        title: String,

        /// Media URL (YouTube, Vimeo, Spotify, SoundCloud or a direct file)
        #[arg(long)]
        url: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a media item by ID
    Remove {
        /// Item ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ShopCommands {
    /// Append a shop item
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        link: String,

        /// Price label, e.g. "0.05 ETH"
        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Remove a shop item by ID
    Remove {
        /// Item ID (UUID)
        id: String,
    },
}
