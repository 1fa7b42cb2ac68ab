use crate::models::{
    CreatorRef, Level, RecommendedVideo, ScoredVideo, TagRef, UserPreferences, Video, VideoFilters,
};
use crate::services::query_service;
use crate::services::recommendation_service::{
    self, DEFAULT_RECOMMENDED_LIMIT, DEFAULT_SIMILAR_LIMIT,
};
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, post, State};

#[get("/")]
pub async fn list_videos(state: &State<AppState>) -> Json<Vec<Video>> {
    let videos: Vec<Video> = state
        .catalogue
        .all_videos()
        .into_iter()
        .cloned()
        .collect();
    info!("Listing {} catalogue videos", videos.len());
    Json(videos)
}

/// Absent is a valid result: unknown ids answer `null`, not an error status.
#[get("/<id>")]
pub async fn get_video(id: &str, state: &State<AppState>) -> Json<Option<Video>> {
    Json(state.catalogue.video_by_id(id).cloned())
}

/// Unknown level strings degrade to an empty list.
#[get("/level/<level>")]
pub async fn videos_by_level(level: &str, state: &State<AppState>) -> Json<Vec<Video>> {
    let videos = match Level::parse(level) {
        Some(level) => state.catalogue.videos_by_level(level).to_vec(),
        None => Vec::new(),
    };
    Json(videos)
}

/// Label lists backing the filter panel. Denormalized, not foreign-key
/// checked against the records.
#[get("/creators")]
pub async fn list_creators(state: &State<AppState>) -> Json<Vec<CreatorRef>> {
    Json(state.catalogue.creators().to_vec())
}

#[get("/tags")]
pub async fn list_tags(state: &State<AppState>) -> Json<Vec<TagRef>> {
    Json(state.catalogue.tags().to_vec())
}

/// Lenient multi-criterion filter: unparseable values arrive as `None` and
/// impose no constraint.
#[get("/filter?<filters..>")]
pub async fn filter_videos(filters: VideoFilters, state: &State<AppState>) -> Json<Vec<Video>> {
    let videos: Vec<Video> = query_service::filter_videos(&state.catalogue, &filters)
        .into_iter()
        .cloned()
        .collect();
    Json(videos)
}

#[get("/<id>/similar?<limit>", rank = 2)]
pub async fn similar_videos(
    id: &str,
    limit: Option<usize>,
    state: &State<AppState>,
) -> Json<Vec<ScoredVideo>> {
    let limit = limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    Json(recommendation_service::similar_videos(
        &state.catalogue,
        id,
        limit,
    ))
}

#[post("/recommended?<limit>", data = "<preferences>")]
pub async fn recommended_videos(
    preferences: Json<UserPreferences>,
    limit: Option<usize>,
    state: &State<AppState>,
) -> Json<Vec<RecommendedVideo>> {
    let limit = limit.unwrap_or(DEFAULT_RECOMMENDED_LIMIT);
    Json(recommendation_service::recommended_videos(
        &state.catalogue,
        &preferences,
        limit,
    ))
}
