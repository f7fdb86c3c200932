pub mod media_classifier;
pub mod url_media_classifier;
