pub mod llm_response;
pub mod request;
pub mod response;

pub use llm_response::RawLlmResponse;
pub use request::{GenerateQuestionRequest, QuestionParams};
