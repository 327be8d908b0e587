//! Top 10 browsing, with a bundled fallback dataset.
//!
//! Live data needs a TMDB key. Without one, or whenever the provider call
//! fails, the listing falls back to the bundled sample data and says so.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use blockbustr_domain::{Top10Category, Top10Entry};

use crate::infrastructure::ports::{MovieMetadataPort, SettingsRepo};

const FALLBACK_NOTICE: &str = "Could not connect to TMDB. Showing sample data.";

/// One category's listing, flagged when it came from the bundled dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Top10Listing {
    pub data: Vec<Top10Entry>,
    pub using_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Top 10 use case.
pub struct Top10 {
    metadata: Arc<dyn MovieMetadataPort>,
    settings: Arc<dyn SettingsRepo>,
}

impl Top10 {
    pub fn new(metadata: Arc<dyn MovieMetadataPort>, settings: Arc<dyn SettingsRepo>) -> Self {
        Self { metadata, settings }
    }

    pub async fn category(&self, category: Top10Category) -> Top10Listing {
        let settings = self.settings.get().await.ok().flatten().unwrap_or_default();
        let api_key = settings.tmdb_api_key.trim().to_string();

        if api_key.is_empty() {
            return Top10Listing {
                data: fallback_entries(category),
                using_fallback: true,
                error: None,
            };
        }

        match self
            .metadata
            .top10(category, &api_key, &settings.country)
            .await
        {
            Ok(data) => Top10Listing {
                data,
                using_fallback: false,
                error: None,
            },
            Err(e) => {
                tracing::warn!(category = category.as_str(), error = %e, "TMDB fetch failed, serving fallback data");
                Top10Listing {
                    data: fallback_entries(category),
                    using_fallback: true,
                    error: Some(FALLBACK_NOTICE.to_string()),
                }
            }
        }
    }

    /// All categories at once.
    pub async fn all(&self) -> HashMap<&'static str, Top10Listing> {
        let mut results = HashMap::new();
        for category in Top10Category::all() {
            results.insert(category.as_str(), self.category(*category).await);
        }
        results
    }
}

fn entry(title: &str, year: i32, genre: &str, poster_path: &str) -> Top10Entry {
    Top10Entry {
        title: title.to_string(),
        year: Some(year),
        genre: genre.to_string(),
        poster: format!("https://image.tmdb.org/t/p/w500{poster_path}"),
    }
}

/// Bundled sample listings shown when no TMDB key is configured.
pub fn fallback_entries(category: Top10Category) -> Vec<Top10Entry> {
    match category {
        Top10Category::Movies => vec![
            entry("Oppenheimer", 2023, "Drama/Biography", "/8Gxv8gSFCU0XGDykEGv7zR1n2ua.jpg"),
            entry("Dune: Part Two", 2024, "Sci-Fi/Adventure", "/8b8R8l88Qje9dn9OE8PY05Nxl1X.jpg"),
            entry("The Fall Guy", 2024, "Action/Comedy", "/tSz1qsmSJon0rqjHBxXZmrotuse.jpg"),
            entry("Poor Things", 2023, "Comedy/Drama", "/kCGlIMHnOm8JPXq3rXM6c5wMxcT.jpg"),
            entry("Godzilla x Kong", 2024, "Action/Sci-Fi", "/z1p34vh7dEOnLDmyCrlUVLuoDzd.jpg"),
            entry("Civil War", 2024, "Action/Drama", "/sh7Rg8Er3tFcN9BpKIPOMvALgZd.jpg"),
            entry("Kung Fu Panda 4", 2024, "Animation/Action", "/kDp1vUBnMpe8ak4rjgl3cLELqjU.jpg"),
            entry("Anyone But You", 2023, "Comedy/Romance", "/5qHoazZiaLe7oFBok7XlUhg96f2.jpg"),
            entry("Ghostbusters: Frozen Empire", 2024, "Comedy/Fantasy", "/e1J2oNzSBdou01sUvriVeCgMtqt.jpg"),
            entry("The Beekeeper", 2024, "Action/Thriller", "/A7EByudX0eOzlkQ2FIbogzyazm2.jpg"),
        ],
        Top10Category::Series => vec![
            entry("Squid Game", 2021, "Thriller/Drama", "/dDlEmu3EZ0Pgg93K2SVNLCjCSvE.jpg"),
            entry("Wednesday", 2022, "Comedy/Fantasy", "/9PFonBhy4cQy7Jz20NpMygczOkv.jpg"),
            entry("Stranger Things", 2016, "Sci-Fi/Horror", "/49WJfeN0moxb9IPfGn8AIqMGskD.jpg"),
            entry("The Witcher", 2019, "Fantasy/Action", "/cZ0d3rtvXPVvuiX22sP79K3Hmjz.jpg"),
            entry("Bridgerton", 2020, "Drama/Romance", "/luoKpgVwi1E5nQsi7W0UuKHu2Rq.jpg"),
            entry("The Crown", 2016, "Drama/History", "/1M876KPjulVwppEpldhdc8V4o68.jpg"),
            entry("Money Heist", 2017, "Action/Crime", "/reEMJA1uzscCbkpeRJeTT2bjqUp.jpg"),
            entry("Dark", 2017, "Sci-Fi/Thriller", "/5LoHuHWA4H8jElFlZDvsmU2n63b.jpg"),
            entry("Ozark", 2017, "Crime/Drama", "/pCGyPVrI9Fzw6KENHlA0M0Kf6qG.jpg"),
            entry("The Queen's Gambit", 2020, "Drama", "/zU0htwkhNvBQdVSIKB9s6MgHn6T.jpg"),
        ],
        Top10Category::Action => vec![
            entry("John Wick: Chapter 4", 2023, "Action/Thriller", "/vZloFAK7NmvMGKE7VkF5UHaz0I.jpg"),
            entry("Mission: Impossible - Dead Reckoning", 2023, "Action/Adventure", "/NNxYkU70HPurnNCSiCjYAmacwm.jpg"),
            entry("The Equalizer 3", 2023, "Action/Crime", "/b0Ej6fnXAP8fK75hlyi2jKqdhHz.jpg"),
            entry("Fast X", 2023, "Action/Adventure", "/fiVW06jE7z9YnO4trhaMEdclSiC.jpg"),
            entry("Extraction 2", 2023, "Action/Thriller", "/7gKI9hpEMcZUQpNgKrkDzJpbnNS.jpg"),
            entry("The Meg 2", 2023, "Action/Sci-Fi", "/4m1Au3YkjqsxF8iwQy0fPYSxE0h.jpg"),
            entry("Rebel Moon", 2023, "Action/Sci-Fi", "/ui4DrH1cKk2vkHshcUcGt2lKxCm.jpg"),
            entry("Expendables 4", 2023, "Action/Adventure", "/iwsMu0ehRPbtaSxqiaUDQB9qMWT.jpg"),
            entry("Blue Beetle", 2023, "Action/Sci-Fi", "/mXLOHHc1Zeuwsl4xYKjKh2280oL.jpg"),
            entry("Gran Turismo", 2023, "Action/Drama", "/51tqzRtKMMZEYUpSYkrUE7v9ehm.jpg"),
        ],
        Top10Category::Scifi => vec![
            entry("Interstellar", 2014, "Sci-Fi/Drama", "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg"),
            entry("The Matrix", 1999, "Sci-Fi/Action", "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"),
            entry("Inception", 2010, "Sci-Fi/Thriller", "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"),
            entry("Blade Runner 2049", 2017, "Sci-Fi/Drama", "/gajva2L0rPYkEWjzgFlBXCAVBE5.jpg"),
            entry("Ex Machina", 2014, "Sci-Fi/Thriller", "/btbRB7BrD887j5NrvjxceRDmaot.jpg"),
            entry("Arrival", 2016, "Sci-Fi/Drama", "/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg"),
            entry("The Martian", 2015, "Sci-Fi/Adventure", "/5BHuvQ6p9kfc091Z8RiFNhCwL4b.jpg"),
            entry("Edge of Tomorrow", 2014, "Sci-Fi/Action", "/xjw5trHV7Mwo61P0aFTMU74KpWz.jpg"),
            entry("Annihilation", 2018, "Sci-Fi/Horror", "/d3qcpfNwbAMCNqWDHzPQsUYiUgS.jpg"),
            entry("Tenet", 2020, "Sci-Fi/Action", "/k68nPLbIST6NP96JmTxmZijEvCA.jpg"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use blockbustr_domain::AppSettings;
    use crate::infrastructure::ports::{MetadataError, MockSettingsRepo};

    struct StubMetadata {
        outcome: Result<Vec<Top10Entry>, MetadataError>,
    }

    #[async_trait]
    impl MovieMetadataPort for StubMetadata {
        async fn top10(
            &self,
            _category: Top10Category,
            _api_key: &str,
            _country: &str,
        ) -> Result<Vec<Top10Entry>, MetadataError> {
            self.outcome.clone()
        }

        async fn validate_key(&self, _api_key: &str) -> Result<(), MetadataError> {
            Ok(())
        }
    }

    fn settings_with_key(key: &str) -> MockSettingsRepo {
        let mut settings = AppSettings::default();
        settings.tmdb_api_key = key.to_string();
        let mut repo = MockSettingsRepo::new();
        repo.expect_get().returning(move || Ok(Some(settings.clone())));
        repo
    }

    #[tokio::test]
    async fn test_missing_key_serves_fallback_without_calling_provider() {
        let metadata = StubMetadata {
            outcome: Err(MetadataError::RequestFailed("must not be called".to_string())),
        };
        let top10 = Top10::new(Arc::new(metadata), Arc::new(settings_with_key("")));

        let listing = top10.category(Top10Category::Movies).await;
        assert!(listing.using_fallback);
        assert!(listing.error.is_none());
        assert_eq!(listing.data.len(), 10);
    }

    #[tokio::test]
    async fn test_live_data_passes_through() {
        let metadata = StubMetadata {
            outcome: Ok(vec![entry("Live Movie", 2026, "Action", "/p.jpg")]),
        };
        let top10 = Top10::new(Arc::new(metadata), Arc::new(settings_with_key("key")));

        let listing = top10.category(Top10Category::Action).await;
        assert!(!listing.using_fallback);
        assert_eq!(listing.data[0].title, "Live Movie");
    }

    #[tokio::test]
    async fn test_provider_failure_serves_fallback_with_notice() {
        let metadata = StubMetadata {
            outcome: Err(MetadataError::RequestFailed("timeout".to_string())),
        };
        let top10 = Top10::new(Arc::new(metadata), Arc::new(settings_with_key("key")));

        let listing = top10.category(Top10Category::Scifi).await;
        assert!(listing.using_fallback);
        assert_eq!(listing.error.as_deref(), Some(FALLBACK_NOTICE));
        assert_eq!(listing.data.len(), 10);
    }

    #[tokio::test]
    async fn test_all_covers_every_category() {
        let metadata = StubMetadata {
            outcome: Ok(vec![]),
        };
        let top10 = Top10::new(Arc::new(metadata), Arc::new(settings_with_key("")));

        let all = top10.all().await;
        for category in Top10Category::all() {
            assert!(all.contains_key(category.as_str()));
        }
    }

    #[test]
    fn test_fallback_datasets_have_ten_entries_each() {
        for category in Top10Category::all() {
            assert_eq!(fallback_entries(*category).len(), 10);
        }
    }
}
