use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::taxonomy::QuestionType;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 5;

pub fn validate_options(options: &[String]) -> AppResult<()> {
    if options.len() < MIN_OPTIONS {
        return Err(AppError::InvalidAnswerShape(format!(
            "multiple choice question must have at least {} options, got {}",
            MIN_OPTIONS,
            options.len()
        )));
    }
    if options.len() > MAX_OPTIONS {
        return Err(AppError::InvalidAnswerShape(format!(
            "multiple choice question must have at most {} options, got {}",
            MAX_OPTIONS,
            options.len()
        )));
    }
    Ok(())
}

/// Resolves the untyped `correct_answer` value into its canonical string.
///
/// Multiple choice answers are matched against `options` by exact text. A
/// numeric value is compared through its decimal form and is never used as a
/// position in `options`. Free text answers must be JSON strings.
pub fn normalize_correct_answer(
    value: &Value,
    question_type: QuestionType,
    options: &[String],
) -> AppResult<String> {
    let answer = answer_text(value, question_type)?;

    match question_type {
        QuestionType::MultipleChoice => {
            validate_multiple_choice_answer(&answer, options)?;
            Ok(answer)
        }
        QuestionType::FreeText => {
            validate_free_text_answer(&answer)?;
            Ok(answer)
        }
    }
}

fn answer_text(value: &Value, question_type: QuestionType) -> AppResult<String> {
    match (value, question_type) {
        (Value::String(text), _) => Ok(text.clone()),
        (Value::Number(number), QuestionType::MultipleChoice) => Ok(number_text(number)),
        (Value::Number(number), QuestionType::FreeText) => Err(AppError::InvalidAnswerShape(
            format!("free text answer must be a string, got number {}", number),
        )),
        (other, _) => Err(AppError::InvalidAnswerType(format!(
            "correct answer must be a string or a number, got {}",
            json_type_name(other)
        ))),
    }
}

// Whole-valued floats render without a fractional part: 2.0 -> "2".
fn number_text(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else if let Some(f) = number.as_f64() {
        f.to_string()
    } else {
        number.to_string()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn validate_multiple_choice_answer(answer: &str, options: &[String]) -> AppResult<()> {
    if answer.is_empty() {
        return Err(AppError::InvalidAnswerShape(
            "correct answer must be a non-empty string for multiple choice".to_string(),
        ));
    }
    if !options.iter().any(|option| option == answer) {
        return Err(AppError::InvalidAnswerShape(format!(
            "correct answer '{}' must be one of the options: {:?}",
            answer, options
        )));
    }
    Ok(())
}

pub fn validate_free_text_answer(answer: &str) -> AppResult<()> {
    if answer.is_empty() {
        return Err(AppError::InvalidAnswerShape(
            "correct answer must be a non-empty string for free text".to_string(),
        ));
    }
    Ok(())
}
