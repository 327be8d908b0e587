//! External service port traits (LLM, image generation, movie metadata).

use async_trait::async_trait;

use blockbustr_domain::{ImageReference, Top10Category, Top10Entry};

use super::error::{ImageGenError, LlmError, MetadataError};

// =============================================================================
// LLM Types
// =============================================================================

/// A single-turn text generation request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// System prompt / context.
    pub system_prompt: Option<String>,
    /// The user message.
    pub user_prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Ask the provider for a JSON object response.
    pub json_mode: bool,
}

impl LlmRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            user_prompt: user_prompt.into(),
            max_tokens: None,
            json_mode: false,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// Response from the LLM. The content is untrusted free text and may be
/// empty when the model spent its budget on reasoning or refused.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
}

#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

// =============================================================================
// Image Generation Types
// =============================================================================

/// Quality hint forwarded to the provider where the model supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    Standard,
    High,
}

/// Image generation request.
#[derive(Debug, Clone)]
pub struct PosterImageRequest {
    pub prompt: String,
    pub size: String,
    pub quality: ImageQuality,
}

impl PosterImageRequest {
    /// Standard poster request shape: square, high quality.
    pub fn poster(prompt: String) -> Self {
        Self {
            prompt,
            size: "1024x1024".to_string(),
            quality: ImageQuality::High,
        }
    }
}

#[async_trait]
pub trait ImageGenPort: Send + Sync {
    async fn generate(&self, request: PosterImageRequest) -> Result<ImageReference, ImageGenError>;
}

// =============================================================================
// Movie Metadata
// =============================================================================

#[async_trait]
pub trait MovieMetadataPort: Send + Sync {
    /// Fetch the ten most popular titles for a category.
    async fn top10(
        &self,
        category: Top10Category,
        api_key: &str,
        country: &str,
    ) -> Result<Vec<Top10Entry>, MetadataError>;

    /// Check whether an API key is accepted by the provider.
    async fn validate_key(&self, api_key: &str) -> Result<(), MetadataError>;
}
