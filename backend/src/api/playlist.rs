use crate::models::{Level, Playlist};
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/")]
pub async fn list_playlists(state: &State<AppState>) -> Json<Vec<Playlist>> {
    let playlists: Vec<Playlist> = state
        .catalogue
        .all_playlists()
        .into_iter()
        .cloned()
        .collect();
    Json(playlists)
}

#[get("/<id>")]
pub async fn get_playlist(id: &str, state: &State<AppState>) -> Json<Option<Playlist>> {
    Json(state.catalogue.playlist_by_id(id).cloned())
}

#[get("/level/<level>")]
pub async fn playlists_by_level(level: &str, state: &State<AppState>) -> Json<Vec<Playlist>> {
    let playlists = match Level::parse(level) {
        Some(level) => state.catalogue.playlists_by_level(level).to_vec(),
        None => Vec::new(),
    };
    Json(playlists)
}
