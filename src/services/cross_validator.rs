use crate::errors::{AppError, AppResult};
use crate::models::domain::answer::{normalize_correct_answer, validate_options};
use crate::models::domain::taxonomy::{Difficulty, Language, QuestionType};
use crate::models::domain::topics::is_valid_topic;
use crate::models::dto::{QuestionParams, RawLlmResponse};

/// An LLM payload that passed both validation passes, plus its canonical answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    pub raw: RawLlmResponse,
    pub language: Language,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub correct_answer: String,
}

/// Validates an LLM payload against the request that produced it.
///
/// The echoed parameters are compared right after the content presence checks,
/// before any taxonomy or answer rule, so a substituted field always surfaces
/// as `FieldMismatch`.
pub fn cross_validate(
    raw: RawLlmResponse,
    params: &QuestionParams,
) -> AppResult<ValidatedResponse> {
    validate_content(&raw)?;
    validate_against_request(&raw, params)?;
    let (language, difficulty, question_type, correct_answer) = validate_shape(&raw)?;

    Ok(ValidatedResponse {
        raw,
        language,
        difficulty,
        question_type,
        correct_answer,
    })
}

/// Checks the payload on its own and returns its typed enums and canonical answer.
pub fn validate_shape(
    raw: &RawLlmResponse,
) -> AppResult<(Language, Difficulty, QuestionType, String)> {
    validate_content(raw)?;

    let question_type = QuestionType::from_id(raw.question_type())
        .ok_or_else(|| AppError::UnknownQuestionType(raw.question_type().to_string()))?;
    let difficulty = Difficulty::from_id(raw.difficulty()).ok_or_else(|| {
        AppError::InvalidResponse(format!("invalid difficulty: '{}'", raw.difficulty()))
    })?;
    let language = Language::from_id(raw.language()).ok_or_else(|| {
        AppError::InvalidResponse(format!("invalid language: '{}'", raw.language()))
    })?;

    require(raw.topic(), "topic")?;
    if !is_valid_topic(language.id(), raw.topic()) {
        return Err(AppError::InvalidResponse(format!(
            "invalid topic '{}' for language '{}'",
            raw.topic(),
            language
        )));
    }

    let value = raw
        .correct_answer
        .as_ref()
        .ok_or_else(|| AppError::InvalidResponse("correct answer is required".to_string()))?;

    if question_type == QuestionType::MultipleChoice {
        validate_options(raw.options())?;
    }
    let correct_answer = normalize_correct_answer(value, question_type, raw.options())?;

    Ok((language, difficulty, question_type, correct_answer))
}

/// Code, question text and explanation must be present.
pub fn validate_content(raw: &RawLlmResponse) -> AppResult<()> {
    require(raw.code(), "code")?;
    require(raw.question(), "question text")?;
    require(raw.explanation(), "explanation")
}

/// The LLM must echo back exactly what was asked for.
pub fn validate_against_request(raw: &RawLlmResponse, params: &QuestionParams) -> AppResult<()> {
    let checks = [
        ("language", params.language.id(), raw.language()),
        ("topic", params.topic.id, raw.topic()),
        ("difficulty", params.difficulty.id(), raw.difficulty()),
        ("question_type", params.question_type.id(), raw.question_type()),
    ];

    for (field, expected, actual) in checks {
        if expected != actual {
            return Err(AppError::FieldMismatch {
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
    Ok(())
}

fn require(value: &str, field: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::InvalidResponse(format!("{} is required", field)));
    }
    Ok(())
}
