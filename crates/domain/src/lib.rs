extern crate self as blockbustr_domain;

pub mod entities;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    ActionizedMovie, MovieInfo, SavedMovie, Top10Category, Top10Collection, Top10Entry,
};

// Re-export ID types
pub use ids::{CollectionId, MovieId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    classify_genre, scrub_brands, style_catalog, AppSettings, AppliedStyle, ImageReference,
    PosterRequest, PosterResult, SafetyTier, StyleDescriptor, StyleDetails, DEFAULT_SAFE_TITLE,
    SUMMARY_PREFIX_MAX,
};
