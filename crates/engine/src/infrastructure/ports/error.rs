//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Image generation failure classification.
///
/// Only `PolicyRejection` is eligible for safety-tier escalation; every
/// other kind fails the pipeline immediately. Adapters must classify from
/// the provider's structured error (status + error code), never from
/// message text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageGenError {
    /// The provider refused the prompt on content-policy grounds.
    #[error("content policy rejection: {0}")]
    PolicyRejection(String),
    /// Network/timeout/server-side failure.
    #[error("transient provider error: {0}")]
    Transient(String),
    /// Missing or rejected credentials.
    #[error("authentication failed: {0}")]
    Auth(String),
    /// Rate or usage quota exhausted.
    #[error("quota exhausted: {0}")]
    Quota(String),
    /// The provider reported success but returned no usable image payload.
    #[error("no usable image in provider response: {0}")]
    MalformedResponse(String),
}

impl ImageGenError {
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, Self::PolicyRejection(_))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata request failed: {0}")]
    RequestFailed(String),
    #[error("invalid metadata API key")]
    InvalidKey,
    #[error("invalid metadata response: {0}")]
    InvalidResponse(String),
}
