use crate::{MediaClassifier, MediaType};

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "m4v"];
const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "wav", "ogg", "m4a", "flac"];
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Host-based classifier for the platforms the page knows how to embed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlMediaClassifier;

impl MediaClassifier for UrlMediaClassifier {
    fn classify_media_url(&self, url: &str) -> MediaType {
        let Some(parts) = UrlParts::parse(url) else {
            return MediaType::Unknown;
        };

        if youtube_id(&parts).is_some() {
            return MediaType::Youtube;
        }
        if parts.host_is("vimeo.com") && vimeo_id(&parts).is_some() {
            return MediaType::Vimeo;
        }
        if parts.host_is("spotify.com") && spotify_path(&parts).is_some() {
            return MediaType::Spotify;
        }
        if parts.host_is("soundcloud.com") && !parts.path().is_empty() {
            return MediaType::Soundcloud;
        }

        match parts.extension().as_deref() {
            Some(ext) if VIDEO_EXTENSIONS.contains(&ext) => MediaType::Video,
            Some(ext) if AUDIO_EXTENSIONS.contains(&ext) => MediaType::Audio,
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => MediaType::Image,
            _ => MediaType::Unknown,
        }
    }

    fn to_embed_url(&self, url: &str, media_type: MediaType) -> String {
        let parts = UrlParts::parse(url);
        let embed = match (media_type, parts.as_ref()) {
            (MediaType::Youtube, Some(p)) => {
                youtube_id(p).map(|id| format!("https://www.youtube.com/embed/{id}"))
            }
            (MediaType::Vimeo, Some(p)) => {
                vimeo_id(p).map(|id| format!("https://player.vimeo.com/video/{id}"))
            }
            (MediaType::Spotify, Some(p)) => spotify_path(p)
                .map(|(kind, id)| format!("https://open.spotify.com/embed/{kind}/{id}")),
            (MediaType::Soundcloud, Some(_)) => Some(format!(
                "https://w.soundcloud.com/player/?url={}",
                encode_component(url.trim())
            )),
            _ => None,
        };

        embed.unwrap_or_else(|| url.trim().to_string())
    }
}

struct UrlParts<'a> {
    host: String,
    path_and_query: &'a str,
}

impl<'a> UrlParts<'a> {
    fn parse(url: &'a str) -> Option<Self> {
        let trimmed = url.trim();
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);

        let (host, path_and_query) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        let host = host.to_ascii_lowercase();
        if host.is_empty() || !host.contains('.') {
            return None;
        }

        Some(Self {
            host,
            path_and_query,
        })
    }

    fn host_is(&self, domain: &str) -> bool {
        self.host == domain || self.host.ends_with(&format!(".{domain}"))
    }

    fn path(&self) -> &'a str {
        let end = self
            .path_and_query
            .find(['?', '#'])
            .unwrap_or(self.path_and_query.len());
        self.path_and_query[..end].trim_end_matches('/')
    }

    fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.path().split('/').filter(|s| !s.is_empty())
    }

    fn query_param(&self, name: &str) -> Option<&'a str> {
        let query = self.path_and_query.split_once('?')?.1;
        let query = query.split('#').next().unwrap_or(query);
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
            .filter(|v| !v.is_empty())
    }

    fn extension(&self) -> Option<String> {
        let last = self.segments().last()?;
        let (_, ext) = last.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }
}

fn youtube_id<'a>(parts: &UrlParts<'a>) -> Option<&'a str> {
    if parts.host == "youtu.be" {
        return parts.segments().next();
    }
    if !parts.host_is("youtube.com") {
        return None;
    }

    let mut segments = parts.segments();
    match segments.next()? {
        "watch" => parts.query_param("v"),
        "shorts" | "embed" | "live" => segments.next(),
        _ => None,
    }
}

fn vimeo_id<'a>(parts: &UrlParts<'a>) -> Option<&'a str> {
    parts
        .segments()
        .last()
        .filter(|s| s.chars().all(|c| c.is_ascii_digit()))
}

fn spotify_path<'a>(parts: &UrlParts<'a>) -> Option<(&'a str, &'a str)> {
    let mut segments = parts.segments().skip_while(|s| s.starts_with("intl-"));
    let kind = segments.next()?;
    let id = segments.next()?;
    matches!(kind, "track" | "album" | "playlist" | "episode" | "show" | "artist")
        .then_some((kind, id))
}

fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
