pub mod cross_validator;
pub mod llm;
pub mod prompt_builder;
pub mod question_builder;
pub mod question_service;
pub mod response_normalizer;

pub use question_service::QuestionService;
