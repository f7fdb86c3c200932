use bio_core::ProfileRecord;

/// The scalar text and display fields of a profile, replaced as one object.
///
/// Build it from the current record and change what the user edited:
/// applying it overwrites every field it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub display_name: String,
    pub title: String,
    pub bio: String,
    pub image_ref: String,
    pub wallet_address: String,
    pub show_wallet_address: bool,
    pub btc_address: String,
    pub show_btc_address: bool,
}

impl ProfileFields {
    pub fn apply_to(self, profile: &mut ProfileRecord) {
        profile.display_name = self.display_name;
        profile.title = self.title;
        profile.bio = self.bio;
        profile.image_ref = self.image_ref;
        profile.wallet_address = self.wallet_address;
        profile.show_wallet_address = self.show_wallet_address;
        profile.btc_address = self.btc_address;
        profile.show_btc_address = self.show_btc_address;
    }
}

impl From<&ProfileRecord> for ProfileFields {
    fn from(profile: &ProfileRecord) -> Self {
        Self {
            display_name: profile.display_name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            image_ref: profile.image_ref.clone(),
            wallet_address: profile.wallet_address.clone(),
            show_wallet_address: profile.show_wallet_address,
            btc_address: profile.btc_address.clone(),
            show_btc_address: profile.show_btc_address,
        }
    }
}
