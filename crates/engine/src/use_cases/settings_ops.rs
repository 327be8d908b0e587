//! Settings management.

use std::sync::Arc;

use serde::Serialize;

use blockbustr_domain::AppSettings;

use crate::infrastructure::openai::OPENAI_API_KEY_VAR;
use crate::infrastructure::ports::{MetadataError, MovieMetadataPort, RepoError, SettingsRepo};

/// Settings plus environment facts the UI needs (whether a deployment key
/// overrides the stored one).
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    #[serde(flatten)]
    pub settings: AppSettings,
    pub has_env_api_key: bool,
}

/// Settings use cases: load/save plus TMDB key validation.
pub struct SettingsOps {
    settings: Arc<dyn SettingsRepo>,
    metadata: Arc<dyn MovieMetadataPort>,
}

impl SettingsOps {
    pub fn new(settings: Arc<dyn SettingsRepo>, metadata: Arc<dyn MovieMetadataPort>) -> Self {
        Self { settings, metadata }
    }

    pub async fn get(&self) -> Result<SettingsView, RepoError> {
        let settings = self.settings.get().await?.unwrap_or_default();
        let has_env_api_key = std::env::var(OPENAI_API_KEY_VAR)
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false);
        Ok(SettingsView {
            settings,
            has_env_api_key,
        })
    }

    pub async fn save(&self, settings: AppSettings) -> Result<(), RepoError> {
        self.settings.save(settings).await
    }

    /// Check a TMDB API key against the provider before the user saves it.
    pub async fn test_tmdb_key(&self, api_key: &str) -> Result<(), MetadataError> {
        if api_key.trim().is_empty() {
            return Err(MetadataError::InvalidKey);
        }
        self.metadata.validate_key(api_key.trim()).await
    }

    /// Current language preference, for the text-generation prompts.
    pub async fn language(&self) -> String {
        match self.settings.get().await {
            Ok(Some(settings)) => settings.language,
            _ => AppSettings::default().language,
        }
    }
}
