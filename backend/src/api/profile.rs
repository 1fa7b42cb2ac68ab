use crate::models::{ErrorResponse, Level, RecommendedVideo, VideoFilters};
use crate::services::profile_service::Profile;
use crate::services::recommendation_service::{self, DEFAULT_RECOMMENDED_LIMIT};
use crate::AppState;
use log::info;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

#[get("/")]
pub async fn get_profile(state: &State<AppState>) -> Json<Profile> {
    Json(state.profile.snapshot().await)
}

#[post("/favorites/<id>")]
pub async fn add_favorite(id: &str, state: &State<AppState>) -> Result<Status, ErrorResponse> {
    if state.catalogue.video_by_id(id).is_none() {
        return Err(ErrorResponse {
            error: "unknown_video".to_string(),
            message: format!("No catalogue record with id '{id}'"),
        });
    }

    if state.profile.add_favorite(id).await {
        info!("Added favorite {id}");
        Ok(Status::Created)
    } else {
        Ok(Status::Ok)
    }
}

#[delete("/favorites/<id>")]
pub async fn remove_favorite(id: &str, state: &State<AppState>) -> Result<Status, Status> {
    if state.profile.remove_favorite(id).await {
        Ok(Status::NoContent)
    } else {
        Err(Status::NotFound)
    }
}

#[post("/history/<id>")]
pub async fn record_view(id: &str, state: &State<AppState>) -> Result<Status, Status> {
    if state.catalogue.video_by_id(id).is_none() {
        return Err(Status::NotFound);
    }
    state.profile.record_view(id).await;
    Ok(Status::Ok)
}

#[put("/category/<level>")]
pub async fn set_category(level: &str, state: &State<AppState>) -> Result<Status, Status> {
    match Level::parse(level) {
        Some(level) => {
            state.profile.set_last_category(level).await;
            info!("Active category set to {level}");
            Ok(Status::Ok)
        }
        None => Err(Status::BadRequest),
    }
}

#[put("/filters", data = "<filters>")]
pub async fn save_filters(
    filters: Json<VideoFilters>,
    state: &State<AppState>,
) -> Status {
    state.profile.save_filters(filters.into_inner()).await;
    Status::Ok
}

#[delete("/filters")]
pub async fn clear_filters(state: &State<AppState>) -> Status {
    state.profile.clear_filters().await;
    Status::NoContent
}

/// Recommendations derived from the stored profile: viewing history feeds the
/// exclusion list, saved filters and the last category feed the preferences.
#[get("/recommendations?<limit>")]
pub async fn recommendations(
    limit: Option<usize>,
    state: &State<AppState>,
) -> Json<Vec<RecommendedVideo>> {
    let preferences = state.profile.preferences().await;
    let limit = limit.unwrap_or(DEFAULT_RECOMMENDED_LIMIT);
    Json(recommendation_service::recommended_videos(
        &state.catalogue,
        &preferences,
        limit,
    ))
}
