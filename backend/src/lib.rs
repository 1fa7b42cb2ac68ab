pub mod api;
pub mod catalogue;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use catalogue::Catalogue;
use rocket::{routes, Build, Rocket};
use services::profile_service::ProfileStore;

/// Shared request state: the immutable catalogue plus the viewer profile
/// store. The catalogue is read-only after startup; the profile sits behind
/// its own mutex.
pub struct AppState {
    pub catalogue: Catalogue,
    pub profile: ProfileStore,
}

/// Assemble the server: state, CORS and the route tree. Split from `main` so
/// integration tests can drive the same instance through a local client.
pub fn build_rocket() -> Rocket<Build> {
    let state = config::create_app_state().expect("Catalogue load failed.");
    let cors = config::create_cors().expect("CORS setup failed.");

    rocket::build()
        .manage(state)
        .attach(cors)
        .mount(
            "/videos",
            routes![
                api::video::list_videos,
                api::video::list_creators,
                api::video::list_tags,
                api::video::get_video,
                api::video::videos_by_level,
                api::video::filter_videos,
                api::video::similar_videos,
                api::video::recommended_videos,
            ],
        )
        .mount(
            "/playlists",
            routes![
                api::playlist::list_playlists,
                api::playlist::get_playlist,
                api::playlist::playlists_by_level,
            ],
        )
        .mount("/search", routes![api::search::search_videos])
        .mount(
            "/profile",
            routes![
                api::profile::get_profile,
                api::profile::add_favorite,
                api::profile::remove_favorite,
                api::profile::record_view,
                api::profile::set_category,
                api::profile::save_filters,
                api::profile::clear_filters,
                api::profile::recommendations,
            ],
        )
}
