use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::answer::{
    validate_free_text_answer, validate_multiple_choice_answer, validate_options,
};
use crate::models::domain::taxonomy::{Difficulty, Language, QuestionType};
use crate::models::domain::topics::is_valid_topic;

/// A generated Snippet War question. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub language: Language,
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub code: String,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>, // multiple_choice only
    pub correct_answer: String, // option text for multiple_choice
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acceptable_variants: Vec<String>, // free_text only
    #[serde(default)]
    pub case_sensitive: bool,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(missing("question ID"));
        }
        if self.created_at.timestamp() <= 0 {
            return Err(AppError::InvalidResponse(
                "creation timestamp is required".to_string(),
            ));
        }
        if self.topic.is_empty() {
            return Err(missing("topic"));
        }
        if !is_valid_topic(self.language.id(), &self.topic) {
            return Err(AppError::InvalidResponse(format!(
                "invalid topic '{}' for language '{}'",
                self.topic, self.language
            )));
        }
        if self.code.is_empty() {
            return Err(missing("code"));
        }
        if self.question_text.is_empty() {
            return Err(missing("question text"));
        }
        if self.correct_answer.is_empty() {
            return Err(missing("correct answer"));
        }
        if self.explanation.is_empty() {
            return Err(missing("explanation"));
        }

        match self.question_type {
            QuestionType::MultipleChoice => {
                validate_options(&self.options)?;
                validate_multiple_choice_answer(&self.correct_answer, &self.options)
            }
            QuestionType::FreeText => validate_free_text_answer(&self.correct_answer),
        }
    }
}

fn missing(field: &str) -> AppError {
    AppError::InvalidResponse(format!("{} is required", field))
}
