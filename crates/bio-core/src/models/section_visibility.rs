use serde::{Deserialize, Serialize};

/// Which showcase sections the page renders. All sections start visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionVisibility {
    pub spotlight: bool,
    pub media: bool,
    pub shop: bool,
    pub sticker: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            spotlight: true,
            media: true,
            shop: true,
            sticker: true,
        }
    }
}
