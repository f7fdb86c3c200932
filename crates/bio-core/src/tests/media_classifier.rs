use crate::{MediaClassifier, MediaItem, MediaType, UrlMediaClassifier};

use googletest::prelude::*;

fn classify(url: &str) -> MediaType {
    UrlMediaClassifier.classify_media_url(url)
}

#[test]
fn given_youtube_urls_when_classified_then_youtube() {
    assert_that!(
        classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        eq(MediaType::Youtube)
    );
    assert_that!(classify("https://youtu.be/dQw4w9WgXcQ"), eq(MediaType::Youtube));
    assert_that!(
        classify("https://youtube.com/shorts/abcDEF"),
        eq(MediaType::Youtube)
    );
}

#[test]
fn given_youtube_url_without_video_id_when_classified_then_unknown() {
    assert_that!(
        classify("https://www.youtube.com/channel/xyz"),
        eq(MediaType::Unknown)
    );
    assert_that!(
        classify("https://www.youtube.com/watch?list=abc"),
        eq(MediaType::Unknown)
    );
}

#[test]
fn given_youtube_url_when_embedded_then_uses_embed_path_and_keeps_id_case() {
    let url = "https://www.YouTube.com/watch?v=dQw4w9WgXcQ&t=42";

    let embed = UrlMediaClassifier.to_embed_url(url, MediaType::Youtube);

    assert_that!(
        embed.as_str(),
        eq("https://www.youtube.com/embed/dQw4w9WgXcQ")
    );
}

#[test]
fn given_vimeo_and_spotify_urls_when_embedded_then_platform_players() {
    let vimeo = "https://vimeo.com/76979871";
    let spotify = "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=x";

    assert_that!(classify(vimeo), eq(MediaType::Vimeo));
    assert_that!(classify(spotify), eq(MediaType::Spotify));
    assert_that!(
        UrlMediaClassifier
            .to_embed_url(vimeo, MediaType::Vimeo)
            .as_str(),
        eq("https://player.vimeo.com/video/76979871")
    );
    assert_that!(
        UrlMediaClassifier
            .to_embed_url(spotify, MediaType::Spotify)
            .as_str(),
        eq("https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC")
    );
}

#[test]
fn given_soundcloud_url_when_embedded_then_url_is_percent_encoded() {
    let url = "https://soundcloud.com/artist/track";

    let embed = UrlMediaClassifier.to_embed_url(url, MediaType::Soundcloud);

    assert_that!(classify(url), eq(MediaType::Soundcloud));
    assert_that!(
        embed.as_str(),
        eq("https://w.soundcloud.com/player/?url=https%3A%2F%2Fsoundcloud.com%2Fartist%2Ftrack")
    );
}

#[test]
fn given_direct_file_urls_when_classified_then_by_extension() {
    assert_that!(classify("https://cdn.example.com/a/clip.MP4"), eq(MediaType::Video));
    assert_that!(classify("https://cdn.example.com/song.mp3?dl=1"), eq(MediaType::Audio));
    assert_that!(classify("https://cdn.example.com/cover.webp"), eq(MediaType::Image));
}

#[test]
fn given_unrecognised_input_when_classified_then_unknown() {
    assert_that!(classify(""), eq(MediaType::Unknown));
    assert_that!(classify("not a url"), eq(MediaType::Unknown));
    assert_that!(classify("https://example.com/page"), eq(MediaType::Unknown));
}

#[test]
fn given_media_item_when_classified_then_fills_type_and_embed() {
    // Given
    let mut item = MediaItem::new("Talk", "https://youtu.be/abc123");

    // When
    let media_type = item.classify(&UrlMediaClassifier);

    // Then
    assert_that!(media_type, eq(MediaType::Youtube));
    assert_that!(item.media_type, eq(MediaType::Youtube));
    assert_that!(item.embed_url.as_str(), eq("https://www.youtube.com/embed/abc123"));
}

#[test]
fn given_unknown_media_item_when_classified_then_embed_cleared() {
    let mut item = MediaItem::new("Blog", "https://example.com/post");
    item.embed_url = "stale".to_string();

    let media_type = item.classify(&UrlMediaClassifier);

    assert_that!(media_type, eq(MediaType::Unknown));
    assert!(item.embed_url.is_empty());
}
