//! Movie records: metadata lookups, actionized rewrites, the saved library,
//! and the Top 10 browsing entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CollectionId, MovieId};

/// Metadata for a real movie, as returned by a lookup. Every field may hold
/// fallback content when the lookup could not identify the movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInfo {
    pub title: String,
    pub year: Option<i32>,
    pub genre: String,
    pub director: String,
    pub summary: String,
}

impl Default for MovieInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            year: None,
            genre: String::new(),
            director: String::new(),
            summary: String::new(),
        }
    }
}

/// The action rewrite of a movie's title and summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionizedMovie {
    pub action_title: String,
    pub action_summary: String,
}

/// A movie the user has saved to the local library, together with its
/// action rewrite and generated poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMovie {
    pub id: MovieId,
    pub original: MovieInfo,
    pub action_title: String,
    pub action_summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Poster reference: remote URL or inline `data:` URL.
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub poster_style: Option<String>,
    pub saved_at: DateTime<Utc>,
}

/// One entry in a Top 10 listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Top10Entry {
    pub title: String,
    pub year: Option<i32>,
    pub genre: String,
    pub poster: String,
}

/// Top 10 browsing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Top10Category {
    Movies,
    Series,
    Action,
    Scifi,
}

impl Top10Category {
    pub fn all() -> &'static [Top10Category] {
        &[
            Top10Category::Movies,
            Top10Category::Series,
            Top10Category::Action,
            Top10Category::Scifi,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Top10Category::Movies => "movies",
            Top10Category::Series => "series",
            Top10Category::Action => "action",
            Top10Category::Scifi => "scifi",
        }
    }

    /// Parse a category name, defaulting to `Movies` for unknown input the
    /// way the listing endpoint treats unrecognized categories.
    pub fn parse_or_default(value: &str) -> Top10Category {
        match value {
            "series" => Top10Category::Series,
            "action" => Top10Category::Action,
            "scifi" => Top10Category::Scifi,
            _ => Top10Category::Movies,
        }
    }
}

/// A saved Top 10 collection grouping a batch of actionized movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Top10Collection {
    pub id: CollectionId,
    pub name: String,
    #[serde(default)]
    pub movie_ids: Vec<MovieId>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_or_default() {
        assert_eq!(Top10Category::parse_or_default("series"), Top10Category::Series);
        assert_eq!(Top10Category::parse_or_default("scifi"), Top10Category::Scifi);
        assert_eq!(Top10Category::parse_or_default("anything"), Top10Category::Movies);
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Top10Category::all() {
            assert_eq!(Top10Category::parse_or_default(category.as_str()), *category);
        }
    }
}
