//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{
        ClockPort, CollectionRepo, ImageGenPort, LlmPort, MovieMetadataPort, MovieRepo,
        RandomPort, SettingsRepo,
    },
};
use crate::use_cases::{
    Actionize, GenerateTags, GeneratePoster, Library, LookupMovie, SettingsOps, Top10,
};

/// Main application state.
///
/// Holds all use cases, fully wired. Passed to HTTP handlers via Axum state.
pub struct App {
    pub poster: Arc<GeneratePoster>,
    pub actionize: Arc<Actionize>,
    pub tags: Arc<GenerateTags>,
    pub lookup: Arc<LookupMovie>,
    pub library: Arc<Library>,
    pub top10: Arc<Top10>,
    pub settings: Arc<SettingsOps>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        llm: Arc<dyn LlmPort>,
        image_gen: Arc<dyn ImageGenPort>,
        metadata: Arc<dyn MovieMetadataPort>,
        movie_repo: Arc<dyn MovieRepo>,
        collection_repo: Arc<dyn CollectionRepo>,
        settings_repo: Arc<dyn SettingsRepo>,
    ) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());

        Self {
            poster: Arc::new(GeneratePoster::new(image_gen, random.clone())),
            actionize: Arc::new(Actionize::new(llm.clone(), random.clone())),
            tags: Arc::new(GenerateTags::new(llm.clone())),
            lookup: Arc::new(LookupMovie::new(llm, clock.clone())),
            library: Arc::new(Library::new(movie_repo, collection_repo, clock, random)),
            top10: Arc::new(Top10::new(metadata.clone(), settings_repo.clone())),
            settings: Arc::new(SettingsOps::new(settings_repo, metadata)),
        }
    }
}
