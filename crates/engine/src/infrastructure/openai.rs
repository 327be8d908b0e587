//! OpenAI client (chat completions + images API).
//!
//! Implements both `LlmPort` and `ImageGenPort`. The API key is resolved per
//! request: the `OPENAI_API_KEY` environment variable wins over the stored
//! setting, so a key configured in the UI never shadows a deployment key.
//!
//! Image failures are classified from the provider's structured error
//! (HTTP status plus the error `code`/`type` fields). Message text is never
//! inspected: it is not a contract and changes between providers.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use blockbustr_domain::{AppSettings, ImageReference};

use crate::infrastructure::ports::{
    ImageGenError, ImageGenPort, ImageQuality, LlmError, LlmPort, LlmRequest, LlmResponse,
    PosterImageRequest, SettingsRepo,
};

/// Default OpenAI base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Environment variable holding the deployment API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

const MISSING_KEY_MESSAGE: &str =
    "OpenAI API key not configured. Set OPENAI_API_KEY environment variable or add it in Settings.";

/// Client for the OpenAI chat completions and images APIs.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    settings: Arc<dyn SettingsRepo>,
}

impl OpenAiClient {
    pub fn new(base_url: &str, settings: Arc<dyn SettingsRepo>) -> Self {
        // Image generation can be slow; chat requests finish well within this.
        let client = Client::builder()
            .timeout(Duration::from_secs(180))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            settings,
        }
    }

    async fn stored_settings(&self) -> AppSettings {
        match self.settings.get().await {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings, using defaults");
                AppSettings::default()
            }
        }
    }

    /// Environment variable first, stored setting second.
    async fn resolve_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(OPENAI_API_KEY_VAR) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
        let stored = self.stored_settings().await.api_key;
        if stored.trim().is_empty() {
            None
        } else {
            Some(stored)
        }
    }
}

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_key = self
            .resolve_api_key()
            .await
            .ok_or_else(|| LlmError::RequestFailed(MISSING_KEY_MESSAGE.to_string()))?;
        let model = self.stored_settings().await.text_model;

        let mut messages = Vec::new();
        if let Some(system) = &request.system_prompt {
            messages.push(ApiChatMessage {
                role: "system",
                content: system.clone(),
            });
        }
        messages.push(ApiChatMessage {
            role: "user",
            content: request.user_prompt.clone(),
        });

        let api_request = ChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: request.max_tokens,
            response_format: request.json_mode.then(|| ResponseFormat {
                r#type: "json_object",
            }),
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::RequestFailed(format!("{status}: {error_text}")));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(LlmResponse { content })
    }
}

#[async_trait]
impl ImageGenPort for OpenAiClient {
    async fn generate(&self, request: PosterImageRequest) -> Result<ImageReference, ImageGenError> {
        let api_key = self
            .resolve_api_key()
            .await
            .ok_or_else(|| ImageGenError::Auth(MISSING_KEY_MESSAGE.to_string()))?;
        let model = self.stored_settings().await.image_model;

        // Only dall-e-3 understands the quality knob; other image models
        // reject unknown parameters.
        let quality = match (model.as_str(), request.quality) {
            ("dall-e-3", ImageQuality::High) => Some("hd"),
            ("dall-e-3", ImageQuality::Standard) => Some("standard"),
            _ => None,
        };

        let api_request = ImageGenerationRequest {
            model,
            prompt: request.prompt,
            n: 1,
            size: request.size,
            quality,
        };

        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .bearer_auth(&api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ImageGenError::Transient(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_provider_error(status, &body));
        }

        let api_response: ImageGenerationResponse = response
            .json()
            .await
            .map_err(|e| ImageGenError::MalformedResponse(e.to_string()))?;

        let image = api_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ImageGenError::MalformedResponse("empty data array".to_string()))?;

        if let Some(url) = image.url {
            return Ok(ImageReference::Url(url));
        }
        if let Some(data) = image.b64_json {
            return Ok(ImageReference::Inline {
                data,
                media_type: "image/png".to_string(),
            });
        }
        Err(ImageGenError::MalformedResponse(
            "no url or b64_json field".to_string(),
        ))
    }
}

/// Error codes the images API uses for content-policy refusals.
const POLICY_REJECTION_CODES: &[&str] = &["content_policy_violation", "moderation_blocked"];
const POLICY_REJECTION_TYPES: &[&str] = &["image_generation_user_error"];

/// Classify a non-success images API response into the port taxonomy.
///
/// Classification keys off the HTTP status and the structured `code`/`type`
/// fields of the error body only.
fn classify_provider_error(status: u16, body: &str) -> ImageGenError {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
    let detail = parsed.as_ref().map(|b| &b.error);
    let message = detail
        .map(|d| d.message.clone())
        .unwrap_or_else(|| format!("HTTP {status}"));

    match status {
        401 | 403 => ImageGenError::Auth(message),
        429 => ImageGenError::Quota(message),
        500..=599 => ImageGenError::Transient(message),
        _ => {
            let code_matches = detail
                .and_then(|d| d.code.as_deref())
                .is_some_and(|code| POLICY_REJECTION_CODES.contains(&code));
            let type_matches = detail
                .and_then(|d| d.r#type.as_deref())
                .is_some_and(|t| POLICY_REJECTION_TYPES.contains(&t));
            if code_matches || type_matches {
                ImageGenError::PolicyRejection(message)
            } else {
                ImageGenError::Transient(message)
            }
        }
    }
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ApiChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ApiChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest {
    model: String,
    prompt: String,
    n: u8,
    size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    code: Option<String>,
    r#type: Option<String>,
}
