pub mod media_item;
pub mod media_type;
pub mod profile_record;
pub mod section_visibility;
pub mod shop_item;
pub mod social_link;
pub mod spotlight_item;
pub mod sticker_record;
