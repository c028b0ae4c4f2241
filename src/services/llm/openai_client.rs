use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::LlmProviderConfig;
use crate::services::llm::{LlmError, LlmPort, RequestContext};

/// Adapter for OpenAI-compatible chat completion endpoints (ProxyAPI by default).
pub struct OpenAiCompatibleClient {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &LlmProviderConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout,
        }
    }

    async fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| classify_openai_error(e, self.timeout))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| classify_openai_error(e, self.timeout))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| classify_openai_error(e, self.timeout))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse("no choices returned".to_string()))?;

        non_empty(choice.message.content)
    }
}

#[async_trait]
impl LlmPort for OpenAiCompatibleClient {
    async fn complete(&self, ctx: &RequestContext, prompt: &str) -> Result<String, LlmError> {
        log::debug!("Calling OpenAI-compatible API, model: {}", self.model);
        ctx.run(self.send(prompt)).await?
    }
}

fn non_empty(content: Option<String>) -> Result<String, LlmError> {
    match content {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LlmError::EmptyResponse(
            "no text content in response".to_string(),
        )),
    }
}

fn classify_openai_error(err: OpenAIError, timeout: Duration) -> LlmError {
    match err {
        OpenAIError::Reqwest(e) => LlmError::from_transport(
            e.is_timeout(),
            e.status().map(|s| s.as_u16()),
            timeout,
            e.to_string(),
        ),
        OpenAIError::ApiError(api) => classify_api_error(api.r#type.as_deref(), &api.message),
        other => LlmError::RequestFailed(other.to_string()),
    }
}

/// async-openai turns a non-2xx reply into `ApiError` without keeping the HTTP
/// status, so the kind is recovered from the error `type` and message text.
/// A body matching none of the known types or phrases is `RequestFailed`, even
/// when the upstream status was 401, 429 or 5xx. The OpenRouter adapter reads
/// the status directly and has no such gap.
fn classify_api_error(kind: Option<&str>, message: &str) -> LlmError {
    let lowered = message.to_lowercase();
    match kind.unwrap_or_default() {
        "invalid_request_error" if lowered.contains("api key") => {
            LlmError::AuthFailure(message.to_string())
        }
        "authentication_error" | "permission_error" => LlmError::AuthFailure(message.to_string()),
        "rate_limit_error" | "insufficient_quota" => LlmError::RateLimited(message.to_string()),
        "server_error" | "service_unavailable" | "overloaded_error" => {
            LlmError::UpstreamUnavailable(message.to_string())
        }
        _ if lowered.contains("rate limit") => LlmError::RateLimited(message.to_string()),
        _ if lowered.contains("incorrect api key") || lowered.contains("unauthorized") => {
            LlmError::AuthFailure(message.to_string())
        }
        _ => LlmError::RequestFailed(message.to_string()),
    }
}
