use crate::MediaType;

/// URL classification collaborator used when media items are saved.
pub trait MediaClassifier {
    /// Detects the media platform or file kind behind `url`.
    /// Returns [`MediaType::Unknown`] for anything unrecognised.
    fn classify_media_url(&self, url: &str) -> MediaType;

    /// Builds the URL the page embeds for `url`, already classified as
    /// `media_type`.
    fn to_embed_url(&self, url: &str, media_type: MediaType) -> String;
}
