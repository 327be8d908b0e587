//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Image generation (could swap OpenAI -> any provider)
//! - LLM calls (could swap OpenAI -> Ollama/Claude)
//! - Movie metadata (could swap TMDB -> other)
//! - Local storage (could swap SQLite -> Postgres)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ImageGenPort, ImageQuality, LlmPort, LlmRequest, LlmResponse, MovieMetadataPort,
    PosterImageRequest,
};

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CollectionRepo, MovieRepo, SettingsRepo};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCollectionRepo, MockMovieRepo, MockSettingsRepo};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ImageGenError, LlmError, MetadataError, RepoError};
