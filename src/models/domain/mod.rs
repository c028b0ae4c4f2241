pub mod answer;
pub mod question;
pub mod taxonomy;
pub mod topics;

pub use question::Question;
pub use taxonomy::{Difficulty, Language, QuestionType};
pub use topics::Topic;
