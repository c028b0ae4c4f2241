pub mod context;
pub mod openai_client;
pub mod openrouter_client;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use context::{CancelHandle, RequestContext};
pub use openai_client::OpenAiCompatibleClient;
pub use openrouter_client::OpenRouterClient;

/// Classified failures of an LLM provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    #[error("Provider request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Provider request canceled")]
    Canceled,

    #[error("Provider authentication failed: {0}")]
    AuthFailure(String),

    #[error("Provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Provider returned an empty response: {0}")]
    EmptyResponse(String),

    #[error("Provider request failed: {0}")]
    RequestFailed(String),
}

impl LlmError {
    pub fn error_code(&self) -> &'static str {
        match self {
            LlmError::Timeout(_) => "PROVIDER_TIMEOUT",
            LlmError::Canceled => "PROVIDER_CANCELED",
            LlmError::AuthFailure(_) => "PROVIDER_AUTH_FAILURE",
            LlmError::RateLimited(_) => "PROVIDER_RATE_LIMITED",
            LlmError::UpstreamUnavailable(_) => "PROVIDER_UNAVAILABLE",
            LlmError::EmptyResponse(_) => "PROVIDER_EMPTY_RESPONSE",
            LlmError::RequestFailed(_) => "PROVIDER_REQUEST_FAILED",
        }
    }

    /// Maps a non-success HTTP status returned by a provider.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => LlmError::AuthFailure(message),
            429 => LlmError::RateLimited(message),
            500..=599 => LlmError::UpstreamUnavailable(format!("status {}: {}", status, message)),
            _ => LlmError::RequestFailed(format!("status {}: {}", status, message)),
        }
    }

    /// Maps a transport-level failure reported by an HTTP client.
    pub fn from_transport(
        is_timeout: bool,
        status: Option<u16>,
        timeout: Duration,
        message: impl Into<String>,
    ) -> Self {
        if is_timeout {
            return LlmError::Timeout(timeout);
        }
        match status {
            Some(status) => LlmError::from_status(status, message),
            None => LlmError::UpstreamUnavailable(message.into()),
        }
    }
}

/// Provider-agnostic chat completion.
///
/// Implementations must honour the deadline and cancellation carried by `ctx`
/// and be safe to share between concurrent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn complete(&self, ctx: &RequestContext, prompt: &str) -> Result<String, LlmError>;
}
