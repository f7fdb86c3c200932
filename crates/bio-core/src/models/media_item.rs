use crate::{MediaClassifier, MediaType};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub embed_url: String,
}

impl MediaItem {
    pub fn new(title: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            link: String::new(),
            source_url: source_url.into(),
            media_type: MediaType::Unknown,
            embed_url: String::new(),
        }
    }

    /// An empty editable row shown when a returning profile has no media.
    pub fn placeholder() -> Self {
        Self::new("", "")
    }

    pub fn is_blank(&self) -> bool {
        self.source_url.trim().is_empty()
    }

    /// Fills `media_type` and `embed_url` from `source_url`.
    /// Returns the detected type; `Unknown` leaves `embed_url` empty.
    pub fn classify(&mut self, classifier: &dyn MediaClassifier) -> MediaType {
        let media_type = classifier.classify_media_url(&self.source_url);
        self.media_type = media_type;
        self.embed_url = if media_type.is_known() {
            classifier.to_embed_url(&self.source_url, media_type)
        } else {
            String::new()
        };
        media_type
    }
}
