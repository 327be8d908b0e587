//! Genre-to-theme classification for safety-sensitive prompts.
//!
//! Sanitized prompts must not echo the original genre wording verbatim, so
//! genres are mapped to generic scene descriptions instead. The table is an
//! ordered list of substring predicates: several predicates can match the
//! same genre string ("Sci-Fi/Thriller"), and the first hit wins.

/// Ordered (predicates, theme description) pairs. Order matters.
const GENRE_THEMES: &[(&[&str], &str)] = &[
    (
        &["sci-fi", "science"],
        "a futuristic setting with advanced technology and explosive space battles",
    ),
    (
        &["horror", "thriller"],
        "a dark tense atmosphere with dangerous action and combat",
    ),
    (
        &["romance", "comedy"],
        "an intense battlefield with explosions and military operations",
    ),
    (
        &["fantasy"],
        "an epic battlefield with swords, warriors, and mystical combat",
    ),
    (
        &["animation", "family"],
        "an adventurous world with high-energy action and excitement",
    ),
    (
        &["war", "history"],
        "a historical battlefield with period warfare and combat",
    ),
    (
        &["drama"],
        "an intense action-packed setting with high stakes",
    ),
];

/// Theme used when no predicate matches (including the empty genre).
const FALLBACK_THEME: &str = "a cinematic action-packed setting with explosions";

/// Map a free-text genre to a generic action theme description.
///
/// Total over all inputs: every string, including the empty one, yields a
/// non-empty description.
pub fn classify_genre(genre: &str) -> &'static str {
    let genre_lower = genre.to_lowercase();
    for (predicates, theme) in GENRE_THEMES {
        if predicates.iter().any(|p| genre_lower.contains(p)) {
            return theme;
        }
    }
    FALLBACK_THEME
}
