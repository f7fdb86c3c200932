use clap::Subcommand;

#[derive(Subcommand)]
pub enum LinkCommands {
    /// Add a social link, replacing any link for the same platform
    Add {
        /// Platform name, e.g. twitter
        platform: String,

        /// Profile URL
        url: String,
    },

    /// Remove the link for a platform
    Remove {
        /// Platform name
        platform: String,
    },
}
