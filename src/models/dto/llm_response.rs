use serde::Deserialize;
use serde_json::Value;

/// Loosely-typed question payload as returned by the LLM.
///
/// Every field tolerates being absent or `null`; deciding whether the payload is
/// usable is the cross validator's job, not the parser's.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLlmResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// String, integer or float depending on the model's mood.
    #[serde(default)]
    pub correct_answer: Option<Value>,
    #[serde(default)]
    pub acceptable_variants: Option<Vec<String>>,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RawLlmResponse {
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }

    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or_default()
    }

    pub fn question_type(&self) -> &str {
        self.question_type.as_deref().unwrap_or_default()
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or_default()
    }

    pub fn difficulty(&self) -> &str {
        self.difficulty.as_deref().unwrap_or_default()
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or_default()
    }
}
