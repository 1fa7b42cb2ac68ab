use crate::catalogue::Catalogue;
use crate::models::{DateBucket, DurationBucket, Video, VideoFilters};
use crate::utils::{leading_minutes, slugify};
use log::debug;

/// Case-insensitive substring search over title, creator, description and
/// tags. An empty or whitespace-only query matches nothing, not everything.
/// Results stay in catalogue order; there is no ranking.
pub fn search_videos<'a>(catalogue: &'a Catalogue, query: &str) -> Vec<&'a Video> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let results: Vec<&Video> = catalogue
        .all_videos()
        .into_iter()
        .filter(|video| {
            video.title.to_lowercase().contains(&term)
                || video.creator.to_lowercase().contains(&term)
                || video.description.to_lowercase().contains(&term)
                || video.tags.iter().any(|tag| tag.contains(&term))
        })
        .collect();

    debug!("Search '{term}' matched {} videos", results.len());
    results
}

/// Apply every present filter as a logical AND. Absent fields impose no
/// constraint, so an empty filter set returns the full catalogue in order.
pub fn filter_videos<'a>(catalogue: &'a Catalogue, filters: &VideoFilters) -> Vec<&'a Video> {
    if filters.is_empty() {
        return catalogue.all_videos();
    }

    catalogue
        .all_videos()
        .into_iter()
        .filter(|video| {
            filters.level.map_or(true, |level| video.level == level)
                && filters
                    .creator
                    .as_deref()
                    .map_or(true, |creator| matches_creator(video, creator))
                && filters
                    .tags
                    .as_deref()
                    .map_or(true, |tags| matches_tags(video, tags))
                && filters
                    .duration
                    .map_or(true, |bucket| matches_duration(video, bucket))
                && filters.date.map_or(true, |bucket| matches_date(video, bucket))
        })
        .collect()
}

/// Substring match on the display name, or exact match against its slugified
/// form so filter-panel ids like "stoicescu-luca" resolve.
fn matches_creator(video: &Video, creator: &str) -> bool {
    let needle = creator.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    video.creator.to_lowercase().contains(&needle) || slugify(&video.creator) == needle
}

/// OR semantics inside the tag filter: one shared tag keeps the video.
fn matches_tags(video: &Video, tags: &[String]) -> bool {
    if tags.is_empty() {
        return true;
    }
    tags.iter().any(|tag| video.tags.contains(tag))
}

/// Bucket on the leading minute count of the display duration. Records
/// without a parseable duration (articles, some playlists) are excluded
/// whenever this filter is set.
fn matches_duration(video: &Video, bucket: DurationBucket) -> bool {
    let minutes = match video.duration.as_deref().and_then(leading_minutes) {
        Some(minutes) => minutes,
        None => return false,
    };

    match bucket {
        DurationBucket::Short => minutes < 10,
        DurationBucket::Medium => (10..=20).contains(&minutes),
        DurationBucket::Long => minutes > 20,
    }
}

/// Approximate bucket test over the French relative-date display strings
/// ("Il y a 9 mois", "Il y a 2 ans"). Substring heuristics, kept verbatim
/// with their known imprecision: "Il y a 4 semaines" lands in both the month
/// and six-months buckets.
fn matches_date(video: &Video, bucket: DateBucket) -> bool {
    let date = match video.date.as_deref() {
        Some(date) => date.to_lowercase(),
        None => return false,
    };

    match bucket {
        DateBucket::Month => {
            date.contains("jour")
                || date.contains("semaine")
                || (date.contains("mois") && date.contains("1 mois"))
        }
        DateBucket::SixMonths => {
            date.contains("jour") || date.contains("semaine") || date.contains("mois")
        }
        DateBucket::Year => {
            date.contains("jour")
                || date.contains("semaine")
                || date.contains("mois")
                || (date.contains("an") && date.contains("1 an"))
        }
        DateBucket::Older => date.contains("an") && !date.contains("1 an"),
    }
}
