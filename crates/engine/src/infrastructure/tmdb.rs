//! TMDB movie metadata client.
//!
//! Implements the MovieMetadataPort trait for the Top 10 browsing view.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use blockbustr_domain::{Top10Category, Top10Entry};

use crate::infrastructure::ports::{MetadataError, MovieMetadataPort};

/// Default TMDB API base URL.
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base URL for poster images.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Client for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
}

impl TmdbClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, category: Top10Category, api_key: &str, country: &str) -> String {
        let base = &self.base_url;
        match category {
            Top10Category::Movies => format!(
                "{base}/movie/popular?api_key={api_key}&region={country}&language=en-US&page=1"
            ),
            Top10Category::Series => format!(
                "{base}/tv/popular?api_key={api_key}&region={country}&language=en-US&page=1"
            ),
            Top10Category::Action => format!(
                "{base}/discover/movie?api_key={api_key}&region={country}&with_genres=28&sort_by=popularity.desc&language=en-US&page=1"
            ),
            Top10Category::Scifi => format!(
                "{base}/discover/movie?api_key={api_key}&region={country}&with_genres=878&sort_by=popularity.desc&language=en-US&page=1"
            ),
        }
    }
}

#[async_trait]
impl MovieMetadataPort for TmdbClient {
    async fn top10(
        &self,
        category: Top10Category,
        api_key: &str,
        country: &str,
    ) -> Result<Vec<Top10Entry>, MetadataError> {
        let response = self
            .client
            .get(self.endpoint(category, api_key, country))
            .send()
            .await
            .map_err(|e| MetadataError::RequestFailed(e.to_string()))?;

        if response.status().as_u16() == 401 {
            return Err(MetadataError::InvalidKey);
        }
        if !response.status().is_success() {
            return Err(MetadataError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let listing: ListingResponse = response
            .json()
            .await
            .map_err(|e| MetadataError::InvalidResponse(e.to_string()))?;

        let is_tv = category == Top10Category::Series;
        Ok(listing
            .results
            .into_iter()
            .take(10)
            .map(|item| reshape(item, is_tv))
            .collect())
    }

    async fn validate_key(&self, api_key: &str) -> Result<(), MetadataError> {
        let response = self
            .client
            .get(format!(
                "{}/configuration?api_key={api_key}",
                self.base_url
            ))
            .send()
            .await
            .map_err(|e| MetadataError::RequestFailed(e.to_string()))?;

        match response.status().as_u16() {
            200 => {
                let config: ConfigurationResponse = response
                    .json()
                    .await
                    .map_err(|e| MetadataError::InvalidResponse(e.to_string()))?;
                if config.images.is_some() {
                    Ok(())
                } else {
                    Err(MetadataError::InvalidResponse(
                        "missing images configuration".to_string(),
                    ))
                }
            }
            401 => Err(MetadataError::InvalidKey),
            status => Err(MetadataError::RequestFailed(format!("HTTP {status}"))),
        }
    }
}

fn reshape(item: ListedItem, is_tv: bool) -> Top10Entry {
    let title = if is_tv { item.name } else { item.title }.unwrap_or_default();
    let date = if is_tv {
        item.first_air_date
    } else {
        item.release_date
    };
    Top10Entry {
        title,
        year: date.as_deref().and_then(parse_year),
        genre: genre_names(&item.genre_ids, is_tv),
        poster: item
            .poster_path
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
            .unwrap_or_default(),
    }
}

/// Year prefix of a `YYYY-MM-DD` date string.
fn parse_year(date: &str) -> Option<i32> {
    date.get(..4).and_then(|y| y.parse().ok())
}

/// Join the first two known genre names with a `/`.
fn genre_names(genre_ids: &[i32], is_tv: bool) -> String {
    let names: Vec<&str> = genre_ids
        .iter()
        .filter_map(|&id| {
            if is_tv {
                tv_genre_name(id)
            } else {
                movie_genre_name(id)
            }
        })
        .take(2)
        .collect();
    if names.is_empty() {
        "N/A".to_string()
    } else {
        names.join("/")
    }
}

fn movie_genre_name(id: i32) -> Option<&'static str> {
    Some(match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Sci-Fi",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        _ => return None,
    })
}

fn tv_genre_name(id: i32) -> Option<&'static str> {
    Some(match id {
        10759 => "Action & Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        10762 => "Kids",
        9648 => "Mystery",
        10763 => "News",
        10764 => "Reality",
        10765 => "Sci-Fi & Fantasy",
        10766 => "Soap",
        10767 => "Talk",
        10768 => "War & Politics",
        37 => "Western",
        _ => return None,
    })
}

// =============================================================================
// TMDB API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<ListedItem>,
}

#[derive(Debug, Deserialize)]
struct ListedItem {
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<i32>,
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigurationResponse {
    images: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2023-07-19"), Some(2023));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("soon"), None);
    }

    #[test]
    fn test_genre_names_joins_first_two() {
        assert_eq!(genre_names(&[28, 53, 18], false), "Action/Thriller");
        assert_eq!(genre_names(&[10759], true), "Action & Adventure");
        assert_eq!(genre_names(&[], false), "N/A");
        // Unknown ids are skipped rather than rendered blank.
        assert_eq!(genre_names(&[9999, 35], false), "Comedy");
    }

    #[test]
    fn test_reshape_movie_entry() {
        let item = ListedItem {
            title: Some("Anyone But You".to_string()),
            name: None,
            release_date: Some("2023-12-22".to_string()),
            first_air_date: None,
            genre_ids: vec![35, 10749],
            poster_path: Some("/5qHoazZiaLe7oFBok7XlUhg96f2.jpg".to_string()),
        };
        let entry = reshape(item, false);
        assert_eq!(entry.title, "Anyone But You");
        assert_eq!(entry.year, Some(2023));
        assert_eq!(entry.genre, "Comedy/Romance");
        assert!(entry.poster.starts_with(POSTER_BASE_URL));
    }

    #[test]
    fn test_reshape_series_uses_name_and_air_date() {
        let item = ListedItem {
            title: None,
            name: Some("Wednesday".to_string()),
            release_date: None,
            first_air_date: Some("2022-11-23".to_string()),
            genre_ids: vec![35],
            poster_path: None,
        };
        let entry = reshape(item, true);
        assert_eq!(entry.title, "Wednesday");
        assert_eq!(entry.year, Some(2022));
        assert_eq!(entry.poster, "");
    }
}
