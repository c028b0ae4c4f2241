use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::taxonomy::{Difficulty, Language, QuestionType};
use crate::models::domain::topics::{find_topic, is_valid_topic, Topic};

/// Inbound request for a single generated question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_topic_for_language"))]
pub struct GenerateQuestionRequest {
    #[validate(custom(function = "validate_language"))]
    pub language: String,

    #[validate(length(min = 1, message = "topic is required"))]
    pub topic: String,

    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,

    #[validate(custom(function = "validate_question_type"))]
    pub question_type: String,
}

/// A request whose fields have been resolved against the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionParams {
    pub language: Language,
    pub topic: &'static Topic,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

impl GenerateQuestionRequest {
    pub fn new(
        language: impl Into<String>,
        topic: impl Into<String>,
        difficulty: impl Into<String>,
        question_type: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            topic: topic.into(),
            difficulty: difficulty.into(),
            question_type: question_type.into(),
        }
    }

    /// Validates the request and resolves it into typed parameters.
    pub fn resolve(&self) -> AppResult<QuestionParams> {
        self.validate()?;

        let language = Language::from_id(&self.language).ok_or_else(|| {
            AppError::InvalidRequest(format!("unsupported language: {}", self.language))
        })?;
        let topic = find_topic(language, &self.topic).ok_or_else(|| {
            AppError::InvalidRequest(format!(
                "invalid topic '{}' for language '{}'",
                self.topic, self.language
            ))
        })?;
        let difficulty = Difficulty::from_id(&self.difficulty).ok_or_else(|| {
            AppError::InvalidRequest(format!("invalid difficulty: {}", self.difficulty))
        })?;
        let question_type = QuestionType::from_id(&self.question_type).ok_or_else(|| {
            AppError::InvalidRequest(format!("invalid question type: {}", self.question_type))
        })?;

        Ok(QuestionParams {
            language,
            topic,
            difficulty,
            question_type,
        })
    }
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

fn validate_language(language: &str) -> Result<(), ValidationError> {
    if language.is_empty() {
        return Err(invalid("required", "language is required".to_string()));
    }
    if Language::from_id(language).is_none() {
        return Err(invalid(
            "unsupported_language",
            format!("unsupported language: {}", language),
        ));
    }
    Ok(())
}

fn validate_difficulty(difficulty: &str) -> Result<(), ValidationError> {
    if Difficulty::from_id(difficulty).is_none() {
        return Err(invalid(
            "invalid_difficulty",
            format!("invalid difficulty: {}", difficulty),
        ));
    }
    Ok(())
}

fn validate_question_type(question_type: &str) -> Result<(), ValidationError> {
    if QuestionType::from_id(question_type).is_none() {
        return Err(invalid(
            "invalid_question_type",
            format!("invalid question type: {}", question_type),
        ));
    }
    Ok(())
}

fn validate_topic_for_language(request: &GenerateQuestionRequest) -> Result<(), ValidationError> {
    // Language and empty-topic problems are reported by the field validators.
    if request.topic.is_empty() || Language::from_id(&request.language).is_none() {
        return Ok(());
    }
    if !is_valid_topic(&request.language, &request.topic) {
        return Err(invalid(
            "invalid_topic",
            format!(
                "invalid topic '{}' for language '{}'",
                request.topic, request.language
            ),
        ));
    }
    Ok(())
}
