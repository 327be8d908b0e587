//! Prompt construction for the three poster safety tiers.
//!
//! Each builder is a pure function: same inputs, same prompt. The rich tier
//! is the only one that sees the original movie; the sanitized tier works
//! from scrubbed text and a generic theme; the ultra-safe tier gets nothing
//! but the final title.

use blockbustr_domain::{classify_genre, scrub_brands, PosterRequest, StyleDescriptor};

/// Full creative prompt referencing the original movie and a selected style.
pub fn build_rich_prompt(request: &PosterRequest, style: &StyleDescriptor) -> String {
    let title = request.resolved_title();
    let original_title = request.original_title.trim();

    let original_context = if original_title.is_empty() {
        String::new()
    } else {
        format!("This is an action-packed reimagining of the movie \"{original_title}\".\n")
    };
    let genre_context = if request.genre.trim().is_empty() {
        String::new()
    } else {
        format!(
            "Original genre: {} - reimagined as an explosive action thriller.\n",
            actionized_genre(request.genre.trim())
        )
    };
    let summary_context = request
        .summary_prefix()
        .map(|summary| format!("Original story essence: {summary}\n"))
        .unwrap_or_default();
    let reference_line = style
        .reference_aesthetic
        .map(|aesthetic| format!("- Art style: {aesthetic}\n"))
        .unwrap_or_default();
    let concept_source = if original_title.is_empty() {
        title
    } else {
        original_title
    };

    format!(
        r#"Create a hyper-explosive action movie poster for "{title}" in {style_name} style.

{original_context}{genre_context}{summary_context}
TRANSFORMATION CONCEPT:
- Imagine taking the original rom-com "{concept_source}" and turning it into an over-the-top action blockbuster
- Keep iconic visual elements from the original film but add explosions, combat, and danger
- If it was romance: dates become missions, kissing scenes become combat, love letters become battle plans
- If it was comedy: jokes become one-liners during gunfights, funny moments become explosive stunts
- If it was drama: emotional scenes become intense action sequences, conflicts become literal battles
- Transform every element into maximum adrenaline and danger

STYLE REQUIREMENTS ({style_name}):
- Professional Hollywood action blockbuster poster aesthetic
- {composition}
- Characters should evoke the spirit of the original film but in intense action context
- {lighting}
- Color palette: {color_palette}
- Mood: {mood}
{reference_line}- High quality, 8K detail, photorealistic style
- Include the movie title "{title}" prominently displayed in bold, aggressive typography
- Title should be in a military-style or impact font with metallic or explosive effect
- Intense, dramatic, and explosive composition
- Make it unmistakably an ACTION version with explosions and combat"#,
        style_name = style.name,
        composition = style.composition,
        lighting = style.lighting,
        color_palette = style.color_palette,
        mood = style.mood,
    )
}

/// Brand-scrubbed prompt with generic thematic language. Never references
/// the original title or summary verbatim and takes no style descriptor.
pub fn build_sanitized_prompt(request: &PosterRequest) -> String {
    let raw_title = {
        let action = request.action_title.trim();
        if action.is_empty() {
            request.original_title.trim()
        } else {
            action
        }
    };
    let safe_title = scrub_brands(raw_title);
    let theme = classify_genre(&request.genre);

    format!(
        r#"Create an ORIGINAL action movie poster concept (not based on any existing film or franchise).

POSTER TITLE: "{safe_title}"

SCENE DESCRIPTION:
An explosive action hero in {theme}. Show intense combat, dramatic explosions, or high-stakes confrontation.

ARTISTIC STYLE:
- Professional Hollywood movie poster quality
- Photorealistic, high-end cinematographic look
- Dramatic lighting with fire, explosions, or intense highlights
- Color palette: orange fire, red explosions, steel blue, dark shadows
- Dynamic action composition with depth
- 8K detail quality
- Intense, dramatic composition

TYPOGRAPHY:
- Display the title "{safe_title}" prominently
- Use bold, aggressive military-style or impact font
- Add metallic effect or explosive glow to the title text

IMPORTANT: This is an ORIGINAL creative concept, not a recreation or parody of any existing film. Create something unique and explosive."#
    )
}

/// Minimal, wholly generic prompt. The caller passes the final title,
/// already resolved, defaulted, and scrubbed.
pub fn build_ultra_safe_prompt(resolved_title: &str) -> String {
    format!(
        r#"Create a powerful action movie poster for "{resolved_title}".

SCENE: A determined action hero in intense combat during an explosive moment with dramatic fire and smoke.

STYLE:
- Professional cinema poster quality
- Intense orange, red, and steel blue color palette
- Dynamic explosions and smoke background
- Photorealistic, high quality
- Dramatic and intense

Include bold military-style typography that says "{resolved_title}" in aggressive impact font.

This is an original artistic creation, not based on any existing property."#
    )
}

/// Rewrite romance/comedy genre words as "action" before echoing a genre
/// into the rich prompt.
fn actionized_genre(genre: &str) -> String {
    let replaced = replace_all_ignore_ascii_case(genre, "romance", "action");
    replace_all_ignore_ascii_case(&replaced, "comedy", "action")
}

fn replace_all_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();

    let mut result = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(found) = lower_haystack[cursor..].find(&lower_needle) {
        let start = cursor + found;
        result.push_str(&haystack[cursor..start]);
        result.push_str(replacement);
        cursor = start + lower_needle.len();
    }
    result.push_str(&haystack[cursor..]);
    result
}
