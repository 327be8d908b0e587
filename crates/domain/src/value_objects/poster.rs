//! Poster pipeline value objects: the request, the safety tier ladder, and
//! the generated result.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::style::StyleDescriptor;

/// Display title used when neither the action title nor the original title
/// resolves to anything usable.
pub const DEFAULT_UNTITLED: &str = "Untitled Action";

/// Maximum number of characters of the original summary embedded in a
/// rich-tier prompt.
pub const SUMMARY_PREFIX_MAX: usize = 300;

/// Input to the poster pipeline. Every field is untrusted free text and may
/// be empty; title resolution guarantees a non-empty display title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterRequest {
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub action_title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub original_summary: String,
}

impl PosterRequest {
    /// Resolve the display title: action title first, original title second,
    /// fixed default last. Never empty.
    pub fn resolved_title(&self) -> &str {
        let action = self.action_title.trim();
        if !action.is_empty() {
            return action;
        }
        let original = self.original_title.trim();
        if !original.is_empty() {
            return original;
        }
        DEFAULT_UNTITLED
    }

    /// Bounded prefix of the original summary, or `None` when empty.
    ///
    /// The cut respects char boundaries so multi-byte text never splits.
    pub fn summary_prefix(&self) -> Option<&str> {
        let summary = self.original_summary.trim();
        if summary.is_empty() {
            return None;
        }
        let mut end = summary.len().min(SUMMARY_PREFIX_MAX);
        while !summary.is_char_boundary(end) {
            end -= 1;
        }
        Some(&summary[..end])
    }
}

/// Escalation ladder for prompt construction. Forward-only: a controller
/// walks Rich -> Sanitized -> UltraSafe and then gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyTier {
    Rich,
    Sanitized,
    UltraSafe,
}

impl SafetyTier {
    /// The next, more conservative tier, or `None` once UltraSafe has been
    /// reached.
    pub fn next(self) -> Option<SafetyTier> {
        match self {
            SafetyTier::Rich => Some(SafetyTier::Sanitized),
            SafetyTier::Sanitized => Some(SafetyTier::UltraSafe),
            SafetyTier::UltraSafe => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyTier::Rich => "rich",
            SafetyTier::Sanitized => "sanitized",
            SafetyTier::UltraSafe => "ultra_safe",
        }
    }
}

impl fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a generated image. The two representations are
/// interchangeable; inline payloads render as `data:` URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    /// Remote locator hosted by the provider.
    Url(String),
    /// Inline base64-encoded payload.
    Inline { data: String, media_type: String },
}

impl ImageReference {
    /// Render the reference as a URL string, inlining base64 payloads as
    /// `data:` URLs.
    pub fn into_url(self) -> String {
        match self {
            ImageReference::Url(url) => url,
            ImageReference::Inline { data, media_type } => {
                format!("data:{media_type};base64,{data}")
            }
        }
    }
}

/// Echo of the style descriptor a rich-tier poster was generated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDetails {
    pub color_palette: String,
    pub mood: String,
    pub composition: String,
}

/// Style metadata attached to rich-tier successes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedStyle {
    pub name: String,
    pub details: StyleDetails,
}

impl From<&StyleDescriptor> for AppliedStyle {
    fn from(style: &StyleDescriptor) -> Self {
        Self {
            name: style.name.to_string(),
            details: StyleDetails {
                color_palette: style.color_palette.to_string(),
                mood: style.mood.to_string(),
                composition: style.composition.to_string(),
            },
        }
    }
}

/// Output of the poster pipeline.
///
/// `style` is present only when the rich tier succeeded; the sanitized and
/// ultra-safe tiers bypass style selection entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterResult {
    pub image: ImageReference,
    pub style: Option<AppliedStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(original: &str, action: &str) -> PosterRequest {
        PosterRequest {
            original_title: original.to_string(),
            action_title: action.to_string(),
            ..PosterRequest::default()
        }
    }

    #[test]
    fn test_resolved_title_prefers_action_title() {
        assert_eq!(request("Love Actually", "War Protocol").resolved_title(), "War Protocol");
    }

    #[test]
    fn test_resolved_title_falls_back_to_original() {
        assert_eq!(request("Love Actually", "").resolved_title(), "Love Actually");
        assert_eq!(request("Love Actually", "   ").resolved_title(), "Love Actually");
    }

    #[test]
    fn test_resolved_title_never_empty() {
        assert_eq!(request("", "").resolved_title(), DEFAULT_UNTITLED);
        assert_eq!(request("  ", "\t").resolved_title(), DEFAULT_UNTITLED);
    }

    #[test]
    fn test_summary_prefix_is_bounded() {
        let mut req = PosterRequest::default();
        req.original_summary = "x".repeat(1000);
        let prefix = req.summary_prefix().expect("non-empty summary");
        assert_eq!(prefix.len(), SUMMARY_PREFIX_MAX);
    }

    #[test]
    fn test_summary_prefix_respects_char_boundaries() {
        let mut req = PosterRequest::default();
        // 3-byte chars; 300 is not a multiple of 3 offset from any boundary issue,
        // but the cut must still land on a boundary rather than panic.
        req.original_summary = "愛".repeat(200);
        let prefix = req.summary_prefix().expect("non-empty summary");
        assert!(prefix.len() <= SUMMARY_PREFIX_MAX);
        assert!(req.original_summary.starts_with(prefix));
    }

    #[test]
    fn test_summary_prefix_empty_is_none() {
        assert!(PosterRequest::default().summary_prefix().is_none());
    }

    #[test]
    fn test_tier_escalation_order() {
        assert_eq!(SafetyTier::Rich.next(), Some(SafetyTier::Sanitized));
        assert_eq!(SafetyTier::Sanitized.next(), Some(SafetyTier::UltraSafe));
        assert_eq!(SafetyTier::UltraSafe.next(), None);
    }

    #[test]
    fn test_inline_reference_renders_as_data_url() {
        let image = ImageReference::Inline {
            data: "aGVsbG8=".to_string(),
            media_type: "image/png".to_string(),
        };
        assert_eq!(image.into_url(), "data:image/png;base64,aGVsbG8=");
    }
}
