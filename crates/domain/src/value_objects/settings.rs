//! Application settings record.
//!
//! Plain keyed storage with last-write-wins semantics; no invariants beyond
//! the defaults applied when a field was never saved.

use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-5.2";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_COUNTRY: &str = "BE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// OpenAI API key stored by the user. The environment variable takes
    /// precedence over this value when both are present.
    pub api_key: String,
    pub image_model: String,
    pub text_model: String,
    pub language: String,
    pub tmdb_api_key: String,
    pub country: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            tmdb_api_key: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"api_key":"sk-test"}"#).expect("valid settings json");
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(settings.country, DEFAULT_COUNTRY);
    }
}
