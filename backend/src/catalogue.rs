use crate::models::{CreatorRef, Level, Playlist, TagRef, Video};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The curated dataset, embedded at compile time. Same document shape as the
/// site's data module: per-level video and playlist lists plus the
/// denormalized creator/tag label lists.
const BUILTIN_DATA: &str = include_str!("../data/catalogue.json");

/// Immutable, read-only view over the curated video/playlist records. Built
/// once at startup and handed to the query services as an explicit parameter;
/// there is no create/update/delete at runtime.
#[derive(Debug, Deserialize)]
pub struct Catalogue {
    videos: BTreeMap<Level, Vec<Video>>,
    playlists: BTreeMap<Level, Vec<Playlist>>,
    creators: Vec<CreatorRef>,
    tags: Vec<TagRef>,
}

impl Catalogue {
    pub fn load_builtin() -> Result<Catalogue> {
        serde_json::from_str(BUILTIN_DATA).context("Failed to parse embedded catalogue data")
    }

    /// All videos tagged with `level`, in catalogue-declaration order.
    pub fn videos_by_level(&self, level: Level) -> &[Video] {
        self.videos.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn playlists_by_level(&self, level: Level) -> &[Playlist] {
        self.playlists.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Per-level lists concatenated in level-enumeration order.
    pub fn all_videos(&self) -> Vec<&Video> {
        Level::ALL
            .iter()
            .flat_map(|level| self.videos_by_level(*level))
            .collect()
    }

    pub fn all_playlists(&self) -> Vec<&Playlist> {
        Level::ALL
            .iter()
            .flat_map(|level| self.playlists_by_level(*level))
            .collect()
    }

    /// Linear scan, first match wins. Absent is a valid result, not an error.
    pub fn video_by_id(&self, id: &str) -> Option<&Video> {
        self.all_videos().into_iter().find(|video| video.id == id)
    }

    pub fn playlist_by_id(&self, id: &str) -> Option<&Playlist> {
        self.all_playlists()
            .into_iter()
            .find(|playlist| playlist.id == id)
    }

    pub fn creators(&self) -> &[CreatorRef] {
        &self.creators
    }

    pub fn tags(&self) -> &[TagRef] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalogue_parses() {
        let catalogue = Catalogue::load_builtin().unwrap();
        assert!(!catalogue.all_videos().is_empty());
        assert!(!catalogue.all_playlists().is_empty());
        assert!(!catalogue.creators().is_empty());
        assert!(!catalogue.tags().is_empty());
    }

    #[test]
    fn every_video_matches_its_level_bucket() {
        let catalogue = Catalogue::load_builtin().unwrap();
        for level in Level::ALL {
            for video in catalogue.videos_by_level(level) {
                assert_eq!(video.level, level, "level mismatch for {}", video.id);
            }
        }
    }

    #[test]
    fn all_videos_is_the_sum_of_the_level_lists() {
        let catalogue = Catalogue::load_builtin().unwrap();
        let per_level: usize = Level::ALL
            .iter()
            .map(|level| catalogue.videos_by_level(*level).len())
            .sum();
        assert_eq!(catalogue.all_videos().len(), per_level);
    }

    #[test]
    fn all_videos_follows_level_enumeration_order() {
        let catalogue = Catalogue::load_builtin().unwrap();
        let levels: Vec<Level> = catalogue.all_videos().iter().map(|v| v.level).collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
    }

    #[test]
    fn video_ids_are_unique_within_the_video_collection() {
        let catalogue = Catalogue::load_builtin().unwrap();
        let mut seen = HashSet::new();
        for video in catalogue.all_videos() {
            assert!(seen.insert(&video.id), "duplicate video id {}", video.id);
        }
    }

    #[test]
    fn video_tags_are_lowercase() {
        let catalogue = Catalogue::load_builtin().unwrap();
        for video in catalogue.all_videos() {
            for tag in &video.tags {
                assert_eq!(tag, &tag.to_lowercase(), "tag not lowercase on {}", video.id);
            }
        }
    }

    #[test]
    fn lookup_by_id_returns_the_matching_record() {
        let catalogue = Catalogue::load_builtin().unwrap();
        let video = catalogue.video_by_id("DzCX8xeHxyI").unwrap();
        assert_eq!(video.title, "How to Make a GUI in Roblox Studio (2023)");
        assert_eq!(video.level, Level::Beginner);
        assert!(catalogue.video_by_id("no-such-id").is_none());
    }

    #[test]
    fn playlist_lookup_matches_by_id() {
        let catalogue = Catalogue::load_builtin().unwrap();
        let playlist = catalogue.playlist_by_id("roblox-ui-tutorials-playlist").unwrap();
        assert_eq!(playlist.creator, "Roblox Visuals");
        assert_eq!(playlist.video_count, 3);
        assert!(catalogue.playlist_by_id("missing").is_none());
    }
}
