pub mod question_handler;

pub use question_handler::{
    configure, generate_question, health_check, list_difficulties, list_languages, list_topics,
};
