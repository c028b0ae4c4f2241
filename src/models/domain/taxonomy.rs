use std::fmt;

use serde::{Deserialize, Serialize};

/// Programming languages questions can be generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Go,
    Java,
    Cpp,
    Rust,
    TypeScript,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::Python,
            Language::JavaScript,
            Language::Go,
            Language::Java,
            Language::Cpp,
            Language::Rust,
            Language::TypeScript,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "python" => Some(Language::Python),
            "javascript" => Some(Language::JavaScript),
            "go" => Some(Language::Go),
            "java" => Some(Language::Java),
            "cpp" => Some(Language::Cpp),
            "rust" => Some(Language::Rust),
            "typescript" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Go => "go",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Go => "Go",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Rust => "Rust",
            Language::TypeScript => "TypeScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Difficulty levels, ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Rubric text embedded verbatim in generation prompts.
    pub fn rubric(&self) -> &'static str {
        match self {
            Difficulty::Beginner => {
                "Basic operations and syntax. Simple data types, basic data structures, \
                 simple conditions and loops, simple functions without complex logic, \
                 basic string and number operations."
            }
            Difficulty::Intermediate => {
                "More complex data structures, nested loops and conditions, higher-order \
                 functions, working with collections, basic OOP, exception handling, \
                 basic design patterns."
            }
            Difficulty::Advanced => {
                "Complex algorithms and optimization, advanced language concepts, \
                 concurrent and parallel programming, advanced design patterns, \
                 non-obvious language behavior, performance tuning, memory and pointer \
                 handling."
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice, // exactly one option is correct
    FreeText,
}

impl QuestionType {
    pub fn all() -> &'static [QuestionType] {
        &[QuestionType::MultipleChoice, QuestionType::FreeText]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "multiple_choice" => Some(QuestionType::MultipleChoice),
            "free_text" => Some(QuestionType::FreeText),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::FreeText => "free_text",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub fn is_valid_language(value: &str) -> bool {
    Language::from_id(value).is_some()
}

pub fn is_valid_difficulty(value: &str) -> bool {
    Difficulty::from_id(value).is_some()
}

pub fn is_valid_question_type(value: &str) -> bool {
    QuestionType::from_id(value).is_some()
}
