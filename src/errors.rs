use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::llm::LlmError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    /// `raw` keeps the provider text for diagnostics and is never rendered.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String, raw: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{field} mismatch: expected '{expected}', got '{actual}'")]
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("Invalid answer: {0}")]
    InvalidAnswerShape(String),

    #[error("Invalid answer type: {0}")]
    InvalidAnswerType(String),

    #[error("Unknown question type: '{0}'")]
    UnknownQuestionType(String),

    #[error("Question build failed: {0}")]
    BuildFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Llm(err) => err.error_code(),
            AppError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            AppError::InvalidResponse(_) => "INVALID_RESPONSE",
            AppError::FieldMismatch { .. } => "FIELD_MISMATCH",
            AppError::InvalidAnswerShape(_) => "INVALID_ANSWER_SHAPE",
            AppError::InvalidAnswerType(_) => "INVALID_ANSWER_TYPE",
            AppError::UnknownQuestionType(_) => "UNKNOWN_QUESTION_TYPE",
            AppError::BuildFailure(_) => "BUILD_FAILURE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Llm(LlmError::Timeout(_)) | AppError::Llm(LlmError::Canceled) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            AppError::Llm(LlmError::RateLimited(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Llm(_)
            | AppError::MalformedResponse { .. }
            | AppError::InvalidResponse(_)
            | AppError::FieldMismatch { .. }
            | AppError::InvalidAnswerShape(_)
            | AppError::InvalidAnswerType(_)
            | AppError::UnknownQuestionType(_) => StatusCode::BAD_GATEWAY,
            AppError::BuildFailure(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ValidateRequest,
    BuildPrompt,
    InvokeLlm,
    NormalizeResponse,
    CrossValidate,
    BuildQuestion,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ValidateRequest => "validate_request",
            Stage::BuildPrompt => "build_prompt",
            Stage::InvokeLlm => "invoke_llm",
            Stage::NormalizeResponse => "normalize_response",
            Stage::CrossValidate => "cross_validate",
            Stage::BuildQuestion => "build_question",
        };
        f.write_str(name)
    }
}

/// A failure that terminated the generation pipeline, tagged with the stage it happened in.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: AppError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: AppError) -> Self {
        Self { stage, source }
    }

    pub fn kind(&self) -> &AppError {
        &self.source
    }

    pub fn error_code(&self) -> &'static str {
        self.source.error_code()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
            stage: None,
        })
    }
}

impl ResponseError for PipelineError {
    fn status_code(&self) -> StatusCode {
        self.source.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
            stage: Some(self.stage),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();

        if messages.is_empty() {
            return AppError::InvalidRequest(err.to_string());
        }
        messages.sort();
        messages.dedup();
        AppError::InvalidRequest(messages.join("; "))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
