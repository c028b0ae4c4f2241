use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LlmProviderConfig;
use crate::services::llm::{LlmError, LlmPort, RequestContext};

/// Adapter for the OpenRouter chat completion API.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessageReq<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessageReq<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResp,
}

#[derive(Deserialize)]
struct ChatMessageResp {
    #[serde(default)]
    content: Option<Value>,
}

impl OpenRouterClient {
    pub fn new(config: &LlmProviderConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::RequestFailed(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout,
        })
    }

    async fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessageReq {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let res = self
            .client
            .post(&url)
            .header(USER_AGENT, "snippet-war/0.1")
            .header(CONTENT_TYPE, "application/json")
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&req)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let msg = extract_error_message(&body).unwrap_or(body);
            return Err(LlmError::from_status(status.as_u16(), msg));
        }

        let body: ChatCompletionResponse = res
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse("no choices returned".to_string()))?;

        choice
            .message
            .content
            .as_ref()
            .and_then(content_text)
            .ok_or_else(|| LlmError::EmptyResponse("no text content in response".to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> LlmError {
        LlmError::from_transport(
            e.is_timeout(),
            e.status().map(|s| s.as_u16()),
            self.timeout,
            e.to_string(),
        )
    }
}

#[async_trait]
impl LlmPort for OpenRouterClient {
    async fn complete(&self, ctx: &RequestContext, prompt: &str) -> Result<String, LlmError> {
        log::debug!("Calling OpenRouter API, model: {}", self.model);
        ctx.run(self.send(prompt)).await?
    }
}

/// Message content is either a plain string or a list of typed parts; the
/// first non-empty text part wins.
fn content_text(content: &Value) -> Option<String> {
    match content {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(parts) => parts.iter().find_map(|part| {
            let is_text = part.get("type").and_then(Value::as_str) == Some("text");
            part.get("text")
                .and_then(Value::as_str)
                .filter(|text| is_text && !text.trim().is_empty())
                .map(str::to_string)
        }),
        _ => None,
    }
}

/// Try to extract a clean error message from an OpenAI-style error body.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct EWrap {
        error: EObj,
    }
    #[derive(Deserialize)]
    struct EObj {
        message: String,
    }
    serde_json::from_str::<EWrap>(body)
        .ok()
        .map(|w| w.error.message)
}
