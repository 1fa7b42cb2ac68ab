use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, FromForm, FromFormField, Response};
use std::fmt;
use std::io::Cursor;

/// Skill tiers partitioning the catalogue. Declaration order is the
/// level-enumeration order used when concatenating per-level lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, FromFormField,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Principles,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Principles,
    ];

    /// Lenient parse for path/query strings. Unknown levels yield `None`,
    /// which callers turn into an empty result rather than an error.
    pub fn parse(s: &str) -> Option<Level> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            "principles" => Some(Level::Principles),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Principles => "principles",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub time: String,
}

/// One entry of the static catalogue. `duration`, `views` and `date` are
/// display strings straight from the source site (French relative dates),
/// absent for articles and some playlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub description: String,
    pub url: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notable_videos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_count: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_playlist: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_article: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub description: String,
    pub url: String,
    pub thumbnail_url: String,
    pub video_count: u32,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notable_videos: Option<Vec<String>>,
}

/// Denormalized label entry for the filter panel. Not foreign-key checked
/// against the video records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorRef {
    pub id: String,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRef {
    pub id: String,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    Short,  // < 10 minutes
    Medium, // 10..=20 minutes
    Long,   // > 20 minutes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum DateBucket {
    Month,
    #[serde(rename = "six-months")]
    #[field(value = "six-months")]
    SixMonths,
    Year,
    Older,
}

/// Multi-criterion filter. Every field is independently optional; absent
/// fields impose no constraint. Arrives either as lenient query params or as
/// the saved-filters payload in the profile store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromForm)]
pub struct VideoFilters {
    pub level: Option<Level>,
    pub creator: Option<String>,
    pub tags: Option<Vec<String>>,
    pub duration: Option<DurationBucket>,
    pub date: Option<DateBucket>,
}

impl VideoFilters {
    pub fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.creator.is_none()
            && self.tags.as_ref().map_or(true, |t| t.is_empty())
            && self.duration.is_none()
            && self.date.is_none()
    }
}

/// Viewer preferences driving the recommendation scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub viewed_videos: Vec<String>,
    #[serde(default)]
    pub preferred_tags: Vec<String>,
    #[serde(default)]
    pub preferred_level: Option<Level>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVideo {
    #[serde(flatten)]
    pub video: Video,
    pub similarity_score: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedVideo {
    #[serde(flatten)]
    pub video: Video,
    pub recommendation_score: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<Video>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).unwrap();
        Response::build()
            .status(Status::BadRequest)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

fn is_false(b: &bool) -> bool {
    !b
}
