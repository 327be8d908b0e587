//! Poster generation pipeline.
//!
//! A forward-only escalation over three prompt tiers: the rich prompt runs
//! first, and a content-policy rejection moves the next attempt one tier
//! down the ladder (sanitized, then ultra-safe). Every other failure ends
//! the pipeline immediately - retrying a network or auth failure with a
//! softer prompt cannot help. Each tier is attempted exactly once and the
//! ladder never walks backwards.

mod prompt_builder;
mod style_selector;

pub use prompt_builder::{build_rich_prompt, build_sanitized_prompt, build_ultra_safe_prompt};
pub use style_selector::StyleSelector;

use std::sync::Arc;

use blockbustr_domain::{
    scrub_brands, AppliedStyle, PosterRequest, PosterResult, SafetyTier,
};

use crate::infrastructure::ports::{
    ImageGenError, ImageGenPort, PosterImageRequest, RandomPort,
};

/// Generate poster use case: the tier fallback controller.
pub struct GeneratePoster {
    image_gen: Arc<dyn ImageGenPort>,
    styles: StyleSelector,
}

impl GeneratePoster {
    pub fn new(image_gen: Arc<dyn ImageGenPort>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            image_gen,
            styles: StyleSelector::new(random),
        }
    }

    /// Run the pipeline for one request.
    ///
    /// Attempts run strictly in sequence; the image call is the only await
    /// point. Style metadata is attached only when the rich tier succeeds,
    /// since the safer tiers bypass style selection.
    pub async fn execute(&self, request: &PosterRequest) -> Result<PosterResult, PosterError> {
        let mut tier = SafetyTier::Rich;
        loop {
            let (prompt, applied_style) = self.build_for_tier(tier, request);
            tracing::debug!(tier = %tier, "requesting poster image");

            match self
                .image_gen
                .generate(PosterImageRequest::poster(prompt))
                .await
            {
                Ok(image) => {
                    tracing::info!(
                        tier = %tier,
                        style = applied_style.as_ref().map(|s| s.name.as_str()),
                        "poster generated"
                    );
                    return Ok(PosterResult {
                        image,
                        style: applied_style,
                    });
                }
                Err(ImageGenError::PolicyRejection(reason)) => match tier.next() {
                    Some(next_tier) => {
                        tracing::warn!(
                            rejected_tier = %tier,
                            next_tier = %next_tier,
                            %reason,
                            "content policy rejection, escalating to a safer prompt"
                        );
                        tier = next_tier;
                    }
                    None => {
                        tracing::warn!(
                            rejected_tier = %tier,
                            %reason,
                            "content policy rejection at the most conservative tier"
                        );
                        return Err(PosterError::Exhausted);
                    }
                },
                Err(source) => {
                    tracing::error!(tier = %tier, error = %source, "poster generation failed");
                    return Err(PosterError::Generation { tier, source });
                }
            }
        }
    }

    fn build_for_tier(
        &self,
        tier: SafetyTier,
        request: &PosterRequest,
    ) -> (String, Option<AppliedStyle>) {
        match tier {
            SafetyTier::Rich => {
                let style = self.styles.select();
                (build_rich_prompt(request, style), Some(AppliedStyle::from(style)))
            }
            SafetyTier::Sanitized => (build_sanitized_prompt(request), None),
            SafetyTier::UltraSafe => {
                let safe_title = scrub_brands(request.resolved_title());
                (build_ultra_safe_prompt(&safe_title), None)
            }
        }
    }
}

/// Terminal pipeline failures.
#[derive(Debug, thiserror::Error)]
pub enum PosterError {
    /// All three tiers were attempted and the last was still rejected on
    /// content-policy grounds.
    #[error("could not generate a poster even with safe prompts; the content may not be suitable for image generation, try a different movie")]
    Exhausted,
    /// A non-policy failure ended the pipeline at the named tier.
    #[error("poster generation failed at the {tier} tier: {source}")]
    Generation {
        tier: SafetyTier,
        source: ImageGenError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use blockbustr_domain::ImageReference;
    use crate::infrastructure::clock::FixedRandom;

    /// Image generator that replays scripted outcomes and records prompts.
    struct ScriptedImageGen {
        outcomes: Mutex<VecDeque<Result<ImageReference, ImageGenError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedImageGen {
        fn new(outcomes: Vec<Result<ImageReference, ImageGenError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().expect("prompts lock").clone()
        }

        fn call_count(&self) -> usize {
            self.prompts().len()
        }
    }

    #[async_trait]
    impl ImageGenPort for ScriptedImageGen {
        async fn generate(
            &self,
            request: PosterImageRequest,
        ) -> Result<ImageReference, ImageGenError> {
            self.prompts.lock().expect("prompts lock").push(request.prompt);
            self.outcomes
                .lock()
                .expect("outcomes lock")
                .pop_front()
                .expect("image generator called more often than scripted")
        }
    }

    fn image() -> ImageReference {
        ImageReference::Url("https://img.example/poster.png".to_string())
    }

    fn rejection() -> ImageGenError {
        ImageGenError::PolicyRejection("content policy".to_string())
    }

    fn controller(image_gen: Arc<ScriptedImageGen>) -> GeneratePoster {
        GeneratePoster::new(image_gen, Arc::new(FixedRandom(0)))
    }

    fn request() -> PosterRequest {
        PosterRequest {
            original_title: "Love Actually".to_string(),
            action_title: "Marvel Strike Force".to_string(),
            genre: "Romance/Comedy".to_string(),
            original_summary: "Nine intertwined stories examine love in London.".to_string(),
        }
    }

    // Tier markers: each builder opens with distinct fixed scaffolding.
    const RICH_MARKER: &str = "hyper-explosive action movie poster";
    const SANITIZED_MARKER: &str = "ORIGINAL action movie poster concept";
    const ULTRA_SAFE_MARKER: &str = "powerful action movie poster";

    #[tokio::test]
    async fn test_rich_success_returns_style_tag() {
        let image_gen = ScriptedImageGen::new(vec![Ok(image())]);
        let result = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect("rich success");

        assert!(result.style.is_some(), "rich-tier success carries its style");
        assert_eq!(image_gen.call_count(), 1);
        assert!(image_gen.prompts()[0].contains(RICH_MARKER));
    }

    #[tokio::test]
    async fn test_policy_rejection_escalates_through_all_tiers() {
        let image_gen = ScriptedImageGen::new(vec![
            Err(rejection()),
            Err(rejection()),
            Ok(image()),
        ]);
        let result = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect("ultra-safe success");

        // No style tag once the rich tier was rejected.
        assert!(result.style.is_none());

        let prompts = image_gen.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains(RICH_MARKER));
        assert!(prompts[1].contains(SANITIZED_MARKER));
        assert!(prompts[2].contains(ULTRA_SAFE_MARKER));
        // The ladder never revisits an earlier tier.
        assert!(!prompts[1].contains(RICH_MARKER));
        assert!(!prompts[2].contains(SANITIZED_MARKER));
    }

    #[tokio::test]
    async fn test_sanitized_success_has_no_style_and_no_brand() {
        let image_gen = ScriptedImageGen::new(vec![Err(rejection()), Ok(image())]);
        let result = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect("sanitized success");

        assert!(result.style.is_none());
        let prompts = image_gen.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(
            !prompts[1].to_ascii_lowercase().contains("marvel"),
            "sanitized prompt leaked a brand: {}",
            prompts[1]
        );
    }

    #[tokio::test]
    async fn test_three_rejections_exhaust_safe_variants() {
        let image_gen = ScriptedImageGen::new(vec![
            Err(rejection()),
            Err(rejection()),
            Err(rejection()),
        ]);
        let err = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect_err("exhausted");

        assert!(matches!(err, PosterError::Exhausted));
        assert_eq!(image_gen.call_count(), 3, "each tier is attempted exactly once");
    }

    #[tokio::test]
    async fn test_ultra_safe_prompt_references_only_the_scrubbed_title() {
        let image_gen = ScriptedImageGen::new(vec![
            Err(rejection()),
            Err(rejection()),
            Err(rejection()),
        ]);
        let _ = controller(image_gen.clone()).execute(&request()).await;

        let ultra_safe = &image_gen.prompts()[2];
        assert!(ultra_safe.contains("Strike Force"));
        assert!(!ultra_safe.to_ascii_lowercase().contains("marvel"));
        assert!(!ultra_safe.contains("Love Actually"));
        assert!(!ultra_safe.contains("Romance"));
        assert!(!ultra_safe.contains("intertwined"));
    }

    #[tokio::test]
    async fn test_transient_error_fails_fast_without_escalation() {
        let image_gen = ScriptedImageGen::new(vec![Err(ImageGenError::Transient(
            "connection reset".to_string(),
        ))]);
        let err = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect_err("transient failure");

        assert!(matches!(
            err,
            PosterError::Generation {
                tier: SafetyTier::Rich,
                source: ImageGenError::Transient(_),
            }
        ));
        // The sanitized and ultra-safe prompts were never sent.
        assert_eq!(image_gen.call_count(), 1);
    }

    #[tokio::test]
    async fn test_auth_error_fails_fast_without_escalation() {
        let image_gen = ScriptedImageGen::new(vec![Err(ImageGenError::Auth(
            "bad key".to_string(),
        ))]);
        let err = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect_err("auth failure");

        assert!(matches!(
            err,
            PosterError::Generation {
                tier: SafetyTier::Rich,
                source: ImageGenError::Auth(_),
            }
        ));
        assert_eq!(image_gen.call_count(), 1);
    }

    #[tokio::test]
    async fn test_non_policy_failure_mid_ladder_names_the_tier() {
        let image_gen = ScriptedImageGen::new(vec![
            Err(rejection()),
            Err(ImageGenError::Quota("rate limited".to_string())),
        ]);
        let err = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect_err("quota failure");

        assert!(matches!(
            err,
            PosterError::Generation {
                tier: SafetyTier::Sanitized,
                source: ImageGenError::Quota(_),
            }
        ));
        assert_eq!(image_gen.call_count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_response_fails_fast() {
        let image_gen = ScriptedImageGen::new(vec![Err(ImageGenError::MalformedResponse(
            "no url or b64_json field".to_string(),
        ))]);
        let err = controller(image_gen.clone())
            .execute(&request())
            .await
            .expect_err("malformed response");

        assert!(matches!(
            err,
            PosterError::Generation {
                tier: SafetyTier::Rich,
                source: ImageGenError::MalformedResponse(_),
            }
        ));
        assert_eq!(image_gen.call_count(), 1);
    }
}
