#[cfg(test)]
pub mod fixtures {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::models::domain::taxonomy::{Difficulty, Language, QuestionType};
    use crate::models::domain::topics::find_topic;
    use crate::models::domain::Question;
    use crate::models::dto::{GenerateQuestionRequest, QuestionParams, RawLlmResponse};
    use crate::services::llm::{LlmError, LlmPort, RequestContext};

    /// A well-formed multiple choice reply for `python_request()`.
    pub const MULTIPLE_CHOICE_JSON: &str = r#"{
  "code": "x = 5\nprint(x)",
  "question": "What does this code print?",
  "question_type": "multiple_choice",
  "options": ["3", "4", "5"],
  "correct_answer": "5",
  "explanation": "x is bound to 5 and print writes its value.",
  "difficulty": "beginner",
  "topic": "variables_types",
  "language": "python"
}"#;

    /// A well-formed free text reply for `go_free_text_request()`.
    pub const FREE_TEXT_JSON: &str = r#"{
  "code": "s := []int{1, 2, 3}\nfmt.Println(len(s[1:]))",
  "question": "What does this code print?",
  "question_type": "free_text",
  "correct_answer": "2",
  "acceptable_variants": ["2\n"],
  "case_sensitive": false,
  "explanation": "Slicing from index 1 leaves two elements.",
  "difficulty": "intermediate",
  "topic": "slices",
  "language": "go"
}"#;

    pub fn python_request() -> GenerateQuestionRequest {
        GenerateQuestionRequest::new("python", "variables_types", "beginner", "multiple_choice")
    }

    pub fn go_free_text_request() -> GenerateQuestionRequest {
        GenerateQuestionRequest::new("go", "slices", "intermediate", "free_text")
    }

    /// Resolved python/variables_types/beginner parameters.
    pub fn python_params(question_type: QuestionType) -> QuestionParams {
        QuestionParams {
            language: Language::Python,
            topic: find_topic(Language::Python, "variables_types").expect("topic is registered"),
            difficulty: Difficulty::Beginner,
            question_type,
        }
    }

    pub fn go_free_text_params() -> QuestionParams {
        QuestionParams {
            language: Language::Go,
            topic: find_topic(Language::Go, "slices").expect("topic is registered"),
            difficulty: Difficulty::Intermediate,
            question_type: QuestionType::FreeText,
        }
    }

    pub fn raw_multiple_choice() -> RawLlmResponse {
        serde_json::from_str(MULTIPLE_CHOICE_JSON).expect("fixture JSON is valid")
    }

    pub fn multiple_choice_question() -> Question {
        Question {
            id: "0b6e5c1e-8f7e-4a55-9a57-2f4f1f3b8c11".to_string(),
            language: Language::Python,
            topic: "variables_types".to_string(),
            difficulty: Difficulty::Beginner,
            question_type: QuestionType::MultipleChoice,
            code: "x = 5\nprint(x)".to_string(),
            question_text: "What does this code print?".to_string(),
            options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            correct_answer: "5".to_string(),
            acceptable_variants: Vec::new(),
            case_sensitive: false,
            explanation: "x is bound to 5 and print writes its value.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    pub fn free_text_question() -> Question {
        Question {
            id: "5d0c7f0a-3c1b-4a9e-8d4f-1e2a3b4c5d6e".to_string(),
            language: Language::Go,
            topic: "slices".to_string(),
            difficulty: Difficulty::Intermediate,
            question_type: QuestionType::FreeText,
            code: "s := make([]int, 0)\nfmt.Printf(\"%T\", s)".to_string(),
            question_text: "What does this code print?".to_string(),
            options: Vec::new(),
            correct_answer: "[]int".to_string(),
            acceptable_variants: vec!["[] int".to_string()],
            case_sensitive: true,
            explanation: "%T prints the dynamic type of the value.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    /// Multiple choice reply for `python_request()` with the given answer and options.
    pub fn reply_with_answer(value: serde_json::Value, options: &[&str]) -> String {
        json!({
            "code": "x = 5\nprint(x)",
            "question": "What does this code print?",
            "question_type": "multiple_choice",
            "options": options,
            "correct_answer": value,
            "explanation": "x is bound to 5 and print writes its value.",
            "difficulty": "beginner",
            "topic": "variables_types",
            "language": "python"
        })
        .to_string()
    }

    /// Deterministic port that always returns the same reply and counts calls.
    pub struct StubLlm {
        reply: Result<String, LlmError>,
        calls: AtomicUsize,
    }

    impl StubLlm {
        pub fn replying(text: impl Into<String>) -> Self {
            Self {
                reply: Ok(text.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(err: LlmError) -> Self {
            Self {
                reply: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmPort for StubLlm {
        async fn complete(&self, _ctx: &RequestContext, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_requests_resolve() {
        assert!(python_request().resolve().is_ok());
        assert!(go_free_text_request().resolve().is_ok());
    }

    #[test]
    fn test_fixture_params_match_requests() {
        let params = python_request().resolve().expect("fixture is valid");
        assert_eq!(
            params,
            python_params(crate::models::domain::QuestionType::MultipleChoice)
        );
        let params = go_free_text_request().resolve().expect("fixture is valid");
        assert_eq!(params, go_free_text_params());
    }

    #[test]
    fn test_fixture_questions_are_valid() {
        assert!(multiple_choice_question().validate().is_ok());
        assert!(free_text_question().validate().is_ok());
    }
}
