use crate::catalogue::Catalogue;
use crate::models::{RecommendedVideo, ScoredVideo, UserPreferences, Video};
use crate::utils::parse_view_count;
use log::debug;
use std::cmp::Ordering;

/// Tuning weights for the similarity score between two records.
pub const SAME_LEVEL_WEIGHT: u32 = 3;
pub const SAME_CREATOR_WEIGHT: u32 = 4;
pub const SHARED_TAG_WEIGHT: u32 = 2;

/// Tuning weights for the recommendation score of a record against viewer
/// preferences, plus the popularity bonus thresholds.
pub const PREFERRED_LEVEL_WEIGHT: u32 = 3;
pub const PREFERRED_TAG_WEIGHT: u32 = 2;
pub const POPULAR_VIEWS_THRESHOLD: u64 = 100_000;
pub const POPULAR_BONUS: u32 = 2;
pub const KNOWN_VIEWS_THRESHOLD: u64 = 10_000;
pub const KNOWN_BONUS: u32 = 1;

pub const DEFAULT_SIMILAR_LIMIT: usize = 4;
pub const DEFAULT_RECOMMENDED_LIMIT: usize = 6;

/// Score every other video against the reference record and keep the best
/// `limit`. Zero-score candidates are dropped; ties keep catalogue order.
/// An unknown reference id yields an empty list.
pub fn similar_videos(catalogue: &Catalogue, video_id: &str, limit: usize) -> Vec<ScoredVideo> {
    let reference = match catalogue.video_by_id(video_id) {
        Some(video) => video,
        None => return Vec::new(),
    };

    let mut scored: Vec<ScoredVideo> = catalogue
        .all_videos()
        .into_iter()
        .filter(|candidate| candidate.id != video_id)
        .map(|candidate| ScoredVideo {
            similarity_score: similarity_score(reference, candidate),
            video: candidate.clone(),
        })
        .filter(|scored| scored.similarity_score > 0)
        .collect();

    scored.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score));
    scored.truncate(limit);

    debug!(
        "Found {} similar videos for {video_id}",
        scored.len()
    );
    scored
}

fn similarity_score(reference: &Video, candidate: &Video) -> u32 {
    let mut score = 0;

    if candidate.level == reference.level {
        score += SAME_LEVEL_WEIGHT;
    }
    if candidate.creator == reference.creator {
        score += SAME_CREATOR_WEIGHT;
    }

    let shared_tags = reference
        .tags
        .iter()
        .filter(|tag| candidate.tags.contains(tag))
        .count() as u32;
    score += shared_tags * SHARED_TAG_WEIGHT;

    score
}

/// Score the catalogue against the viewer's preferences, skipping already
/// viewed records. Ties prefer recent uploads (a date reading "jour");
/// otherwise catalogue order is kept.
pub fn recommended_videos(
    catalogue: &Catalogue,
    preferences: &UserPreferences,
    limit: usize,
) -> Vec<RecommendedVideo> {
    let mut scored: Vec<RecommendedVideo> = catalogue
        .all_videos()
        .into_iter()
        .filter(|video| !preferences.viewed_videos.contains(&video.id))
        .map(|video| RecommendedVideo {
            recommendation_score: recommendation_score(video, preferences),
            video: video.clone(),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.recommendation_score
            .cmp(&a.recommendation_score)
            .then_with(|| match (is_recent(&a.video), is_recent(&b.video)) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            })
    });
    scored.truncate(limit);
    scored
}

fn recommendation_score(video: &Video, preferences: &UserPreferences) -> u32 {
    let mut score = 0;

    if preferences.preferred_level == Some(video.level) {
        score += PREFERRED_LEVEL_WEIGHT;
    }

    let matching_tags = preferences
        .preferred_tags
        .iter()
        .filter(|tag| video.tags.contains(tag))
        .count() as u32;
    score += matching_tags * PREFERRED_TAG_WEIGHT;

    if let Some(views) = video.views.as_deref().and_then(parse_view_count) {
        if views > POPULAR_VIEWS_THRESHOLD {
            score += POPULAR_BONUS;
        } else if views > KNOWN_VIEWS_THRESHOLD {
            score += KNOWN_BONUS;
        }
    }

    score
}

fn is_recent(video: &Video) -> bool {
    video
        .date
        .as_deref()
        .map_or(false, |date| date.to_lowercase().contains("jour"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn catalogue() -> Catalogue {
        Catalogue::load_builtin().unwrap()
    }

    #[test]
    fn similar_videos_never_include_the_reference() {
        let catalogue = catalogue();
        for video in catalogue.all_videos() {
            let similar = similar_videos(&catalogue, &video.id, DEFAULT_SIMILAR_LIMIT);
            assert!(similar.iter().all(|s| s.video.id != video.id));
        }
    }

    #[test]
    fn similar_videos_respect_the_limit_and_sort_descending() {
        let catalogue = catalogue();
        let similar = similar_videos(&catalogue, "DzCX8xeHxyI", 2);
        assert!(similar.len() <= 2);
        for pair in similar.windows(2) {
            assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
    }

    #[test]
    fn shared_level_and_tags_rank_the_gui_tutorials_together() {
        let catalogue = catalogue();
        let similar = similar_videos(&catalogue, "DzCX8xeHxyI", DEFAULT_SIMILAR_LIMIT);

        // Same level plus two shared tags beats same level plus one.
        assert_eq!(similar[0].video.id, "L8Fg1pxPrzY");
        assert_eq!(
            similar[0].similarity_score,
            SAME_LEVEL_WEIGHT + 2 * SHARED_TAG_WEIGHT
        );
        assert_eq!(similar[1].video.id, "lCQyCGkkWHA");
        assert_eq!(
            similar[1].similarity_score,
            SAME_LEVEL_WEIGHT + SHARED_TAG_WEIGHT
        );
    }

    #[test]
    fn zero_score_candidates_are_dropped() {
        let catalogue = catalogue();
        let similar = similar_videos(&catalogue, "lCQyCGkkWHA", usize::MAX);
        assert!(similar.iter().all(|s| s.similarity_score > 0));
        assert!(similar.len() < catalogue.all_videos().len() - 1);
    }

    #[test]
    fn unknown_reference_id_yields_an_empty_list() {
        let catalogue = catalogue();
        assert!(similar_videos(&catalogue, "no-such-id", DEFAULT_SIMILAR_LIMIT).is_empty());
    }

    #[test]
    fn recommendations_exclude_viewed_videos() {
        let catalogue = catalogue();
        let preferences = UserPreferences {
            viewed_videos: vec!["DzCX8xeHxyI".to_string(), "lCQyCGkkWHA".to_string()],
            ..Default::default()
        };
        let recommended =
            recommended_videos(&catalogue, &preferences, DEFAULT_RECOMMENDED_LIMIT);
        assert!(recommended
            .iter()
            .all(|r| r.video.id != "DzCX8xeHxyI" && r.video.id != "lCQyCGkkWHA"));
    }

    #[test]
    fn preferred_level_dominates_the_popularity_bonus() {
        let catalogue = catalogue();
        let preferences = UserPreferences {
            preferred_level: Some(Level::Beginner),
            ..Default::default()
        };
        let recommended = recommended_videos(&catalogue, &preferences, 4);

        // The three beginner records score the level weight; only the UI/UX
        // playlist record crosses the popularity threshold ("352,118" parses
        // past 100k, "226K" reads as a bare 226).
        for scored in &recommended[..3] {
            assert_eq!(scored.video.level, Level::Beginner);
            assert_eq!(scored.recommendation_score, PREFERRED_LEVEL_WEIGHT);
        }
        assert_eq!(recommended[3].video.id, "ui-ux-design-playlist");
        assert_eq!(recommended[3].recommendation_score, POPULAR_BONUS);
    }

    #[test]
    fn preferred_tags_add_per_matching_tag() {
        let catalogue = catalogue();
        let preferences = UserPreferences {
            preferred_tags: vec!["gui".to_string(), "basics".to_string()],
            ..Default::default()
        };
        let recommended = recommended_videos(&catalogue, &preferences, 1);
        // "DzCX8xeHxyI" carries both tags.
        assert_eq!(recommended[0].video.id, "DzCX8xeHxyI");
        assert_eq!(recommended[0].recommendation_score, 2 * PREFERRED_TAG_WEIGHT);
    }
}
