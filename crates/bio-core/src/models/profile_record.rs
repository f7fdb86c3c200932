use crate::{SectionVisibility, SocialLink};

use serde::{Deserialize, Serialize};

/// Profile text, links and display flags for one identity.
///
/// `has_been_edited` decides whether the identity is seeded with example
/// content. It only ever moves from `false` to `true`, so it is private and
/// can only be raised through [`ProfileRecord::mark_edited`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
    pub display_name: String,
    pub title: String,
    pub bio: String,
    pub image_ref: String,
    pub social_links: Vec<SocialLink>,
    pub section_visibility: SectionVisibility,
    pub wallet_address: String,
    pub show_wallet_address: bool,
    pub btc_address: String,
    pub show_btc_address: bool,
    has_been_edited: bool,
}

impl ProfileRecord {
    pub fn has_been_edited(&self) -> bool {
        self.has_been_edited
    }

    pub fn mark_edited(&mut self) {
        self.has_been_edited = true;
    }
}
