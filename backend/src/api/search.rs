use crate::models::SearchResponse;
use crate::services::query_service;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

/// Free-text search over the catalogue. A missing or blank query answers an
/// empty result set, mirroring the search box (typing nothing shows nothing).
/// Non-blank queries are also recorded in the profile's recent searches, as
/// the search box does on submit.
#[get("/?<query>")]
pub async fn search_videos(
    query: Option<String>,
    state: &State<AppState>,
) -> Json<SearchResponse> {
    let query = query.unwrap_or_default();
    let results: Vec<_> = query_service::search_videos(&state.catalogue, &query)
        .into_iter()
        .cloned()
        .collect();

    state.profile.record_search(&query).await;

    Json(SearchResponse {
        total: results.len(),
        query,
        results,
    })
}
