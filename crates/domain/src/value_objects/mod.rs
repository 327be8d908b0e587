//! Pure value objects and static data for the poster pipeline.

mod denylist;
mod poster;
mod settings;
mod style;
mod theme;

pub use denylist::{scrub_brands, BRAND_FRANCHISE_NAMES, DEFAULT_SAFE_TITLE};
pub use poster::{
    AppliedStyle, ImageReference, PosterRequest, PosterResult, SafetyTier, StyleDetails,
    DEFAULT_UNTITLED, SUMMARY_PREFIX_MAX,
};
pub use settings::{
    AppSettings, DEFAULT_COUNTRY, DEFAULT_IMAGE_MODEL, DEFAULT_LANGUAGE, DEFAULT_TEXT_MODEL,
};
pub use style::{style_catalog, StyleDescriptor};
pub use theme::classify_genre;
