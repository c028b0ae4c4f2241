use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::taxonomy::QuestionType;
use crate::models::domain::Question;
use crate::services::cross_validator::ValidatedResponse;

/// Assembles the final [`Question`] and re-checks it.
///
/// The response has already been cross validated, so a failing final check
/// means the two disagree. That is reported as `BuildFailure`, never passed on.
pub fn build_question(validated: ValidatedResponse) -> AppResult<Question> {
    let ValidatedResponse {
        raw,
        language,
        difficulty,
        question_type,
        correct_answer,
    } = validated;

    let (options, acceptable_variants, case_sensitive) = match question_type {
        QuestionType::MultipleChoice => (raw.options.unwrap_or_default(), Vec::new(), false),
        QuestionType::FreeText => (
            Vec::new(),
            raw.acceptable_variants.unwrap_or_default(),
            raw.case_sensitive.unwrap_or(false),
        ),
    };

    let question = Question {
        id: Uuid::new_v4().to_string(),
        language,
        topic: raw.topic.unwrap_or_default(),
        difficulty,
        question_type,
        code: raw.code.unwrap_or_default(),
        question_text: raw.question.unwrap_or_default(),
        options,
        correct_answer,
        acceptable_variants,
        case_sensitive,
        explanation: raw.explanation.unwrap_or_default(),
        created_at: Utc::now(),
    };

    question.validate().map_err(|e| {
        log::error!("Built question {} failed its final check: {}", question.id, e);
        AppError::BuildFailure(e.to_string())
    })?;

    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::taxonomy::{Difficulty, Language};
    use crate::services::cross_validator::cross_validate;
    use crate::test_utils::fixtures::{python_params, raw_multiple_choice};

    fn validated_multiple_choice() -> ValidatedResponse {
        cross_validate(
            raw_multiple_choice(),
            &python_params(QuestionType::MultipleChoice),
        )
        .expect("fixture payload is valid")
    }

    #[test]
    fn test_builds_multiple_choice_question() {
        let question = build_question(validated_multiple_choice()).expect("question should build");

        assert!(!question.id.is_empty());
        assert!(question.created_at.timestamp() > 0);
        assert_eq!(question.language, Language::Python);
        assert_eq!(question.difficulty, Difficulty::Beginner);
        assert_eq!(question.options, vec!["3", "4", "5"]);
        assert_eq!(question.correct_answer, "5");
        assert!(question.acceptable_variants.is_empty());
        assert!(!question.case_sensitive);
    }

    #[test]
    fn test_multiple_choice_drops_free_text_fields() {
        let mut validated = validated_multiple_choice();
        validated.raw.acceptable_variants = Some(vec!["five".to_string()]);
        validated.raw.case_sensitive = Some(true);

        let question = build_question(validated).expect("question should build");
        assert!(question.acceptable_variants.is_empty());
        assert!(!question.case_sensitive);
    }

    #[test]
    fn test_ids_are_unique() {
        let first = build_question(validated_multiple_choice()).expect("question should build");
        let second = build_question(validated_multiple_choice()).expect("question should build");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_inconsistent_input_is_build_failure() {
        let mut validated = validated_multiple_choice();
        validated.correct_answer = "42".to_string();

        let err = build_question(validated).unwrap_err();
        assert_eq!(err.error_code(), "BUILD_FAILURE");
    }
}
