use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref YOUTUBE_ID_RE: Regex = Regex::new(
        r"(?:youtube\.com/watch\?(?:[^&\s]+&)*v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)([a-zA-Z0-9_-]{11})",
    )
    .expect("invalid YouTube id pattern");
}

/// Lowercase a display name and collapse whitespace runs into hyphens, so
/// "Stoicescu Luca" compares equal to the filter id "stoicescu-luca".
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Leading minute count of a "MM:SS" display duration. Durations are display
/// strings, so anything unparseable is treated as absent.
pub fn leading_minutes(duration: &str) -> Option<u32> {
    duration.split(':').next()?.trim().parse().ok()
}

/// Numeric reading of a display view count, keeping digits only. This is the
/// site's own heuristic: "226K" reads as 226 and "352,118" as 352118.
pub fn parse_view_count(views: &str) -> Option<u64> {
    let digits: String = views.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Extract the 11-character video id from watch/short/embed/v YouTube URLs.
pub fn extract_youtube_video_id(url: &str) -> Option<String> {
    YOUTUBE_ID_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Video id plus the playback-relevant query parameters of a YouTube URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeUrlInfo {
    pub video_id: String,
    pub start: Option<String>,
    pub playlist_id: Option<String>,
}

pub fn parse_youtube_url(raw: &str) -> Option<YoutubeUrlInfo> {
    let video_id = extract_youtube_video_id(raw)?;
    let mut start = None;
    let mut playlist_id = None;

    if let Ok(url) = Url::parse(raw) {
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "t" | "start" if start.is_none() => start = Some(value.into_owned()),
                "list" => playlist_id = Some(value.into_owned()),
                _ => {}
            }
        }
    }

    Some(YoutubeUrlInfo {
        video_id,
        start,
        playlist_id,
    })
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

pub fn youtube_short_url(video_id: &str) -> String {
    format!("https://youtu.be/{video_id}")
}

/// The five thumbnail tiers YouTube serves per video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    Default,  // 120x90
    Medium,   // 320x180
    High,     // 480x360
    Standard, // 640x480
    Maxres,   // 1280x720
}

impl ThumbnailQuality {
    pub fn file_stem(&self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Medium => "mqdefault",
            ThumbnailQuality::High => "hqdefault",
            ThumbnailQuality::Standard => "sddefault",
            ThumbnailQuality::Maxres => "maxresdefault",
        }
    }
}

pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!(
        "https://img.youtube.com/vi/{video_id}/{}.jpg",
        quality.file_stem()
    )
}
