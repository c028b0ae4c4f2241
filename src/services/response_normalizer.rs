use crate::errors::{AppError, AppResult};
use crate::models::dto::RawLlmResponse;
use crate::services::llm::LlmError;

const FENCE: &str = "```";

/// Parses the provider's reply into a [`RawLlmResponse`].
///
/// Providers regularly wrap the JSON body in a markdown fence even when told
/// not to, so a leading fence line (with or without a language tag) and a
/// trailing closing fence are removed before parsing.
pub fn parse_llm_response(raw: &str) -> AppResult<RawLlmResponse> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Llm(LlmError::EmptyResponse(
            "response text is empty".to_string(),
        )));
    }

    let body = strip_code_fence(trimmed);

    serde_json::from_str::<RawLlmResponse>(body.trim()).map_err(|e| {
        AppError::MalformedResponse {
            message: format!("failed to parse LLM response as JSON: {}", e),
            raw: raw.to_string(),
        }
    })
}

/// Removes the opening fence line and, when present, the closing fence line.
pub fn strip_code_fence(text: &str) -> String {
    if !text.starts_with(FENCE) {
        return text.to_string();
    }

    let mut lines: Vec<&str> = text.lines().skip(1).collect();

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.last().is_some_and(|line| line.trim() == FENCE) {
        lines.pop();
    }

    lines.join("\n")
}
