use crate::models::{Level, UserPreferences, VideoFilters};
use log::debug;
use serde::Serialize;
use tokio::sync::Mutex;

/// How many recent searches the search box remembers.
pub const MAX_RECENT_SEARCHES: usize = 5;
/// How many recently viewed records feed the recommendations.
pub const MAX_RECENTLY_VIEWED: usize = 10;

/// Viewer-side state: favorites, viewing history, recent searches, the last
/// active category tab and the saved filter selection. Lives outside the
/// catalogue engine, which never reads or writes it.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub favorites: Vec<String>,
    pub recently_viewed: Vec<String>,
    pub recent_searches: Vec<String>,
    pub last_category: Option<Level>,
    pub saved_filters: Option<VideoFilters>,
}

/// In-process store for a single viewer profile. State lives for the process
/// lifetime only.
#[derive(Debug, Default)]
pub struct ProfileStore {
    inner: Mutex<Profile>,
}

impl ProfileStore {
    pub fn new() -> ProfileStore {
        ProfileStore::default()
    }

    pub async fn snapshot(&self) -> Profile {
        self.inner.lock().await.clone()
    }

    /// Returns false if the id was already a favorite.
    pub async fn add_favorite(&self, video_id: &str) -> bool {
        let mut profile = self.inner.lock().await;
        if profile.favorites.iter().any(|id| id == video_id) {
            return false;
        }
        profile.favorites.push(video_id.to_string());
        true
    }

    /// Returns false if the id was not a favorite.
    pub async fn remove_favorite(&self, video_id: &str) -> bool {
        let mut profile = self.inner.lock().await;
        let before = profile.favorites.len();
        profile.favorites.retain(|id| id != video_id);
        profile.favorites.len() != before
    }

    /// Record a view, most recent first, deduped and capped.
    pub async fn record_view(&self, video_id: &str) {
        let mut profile = self.inner.lock().await;
        profile.recently_viewed.retain(|id| id != video_id);
        profile.recently_viewed.insert(0, video_id.to_string());
        profile.recently_viewed.truncate(MAX_RECENTLY_VIEWED);
    }

    /// Record a search term, most recent first, case-insensitively deduped
    /// and capped. Blank terms are ignored.
    pub async fn record_search(&self, query: &str) {
        let term = query.trim();
        if term.is_empty() {
            return;
        }

        let mut profile = self.inner.lock().await;
        let lowered = term.to_lowercase();
        profile
            .recent_searches
            .retain(|existing| existing.to_lowercase() != lowered);
        profile.recent_searches.insert(0, term.to_string());
        profile.recent_searches.truncate(MAX_RECENT_SEARCHES);
        debug!("Recorded search '{term}'");
    }

    pub async fn set_last_category(&self, level: Level) {
        self.inner.lock().await.last_category = Some(level);
    }

    pub async fn save_filters(&self, filters: VideoFilters) {
        self.inner.lock().await.saved_filters = Some(filters);
    }

    pub async fn clear_filters(&self) {
        self.inner.lock().await.saved_filters = None;
    }

    /// Project the stored state into recommendation preferences: history as
    /// the viewed list, the saved filter level (or the last category tab) as
    /// the preferred level, the saved filter tags as preferred tags.
    pub async fn preferences(&self) -> UserPreferences {
        let profile = self.inner.lock().await;
        let saved = profile.saved_filters.as_ref();
        UserPreferences {
            viewed_videos: profile.recently_viewed.clone(),
            preferred_tags: saved
                .and_then(|filters| filters.tags.clone())
                .unwrap_or_default(),
            preferred_level: saved
                .and_then(|filters| filters.level)
                .or(profile.last_category),
        }
    }
}
