use serde::Serialize;

use crate::models::domain::taxonomy::{Difficulty, Language};
use crate::models::domain::topics::{topics_for, Topic};

#[derive(Debug, Clone, Serialize)]
pub struct LanguageDto {
    pub id: &'static str,
    pub name: &'static str,
    pub topic_count: usize,
}

impl From<Language> for LanguageDto {
    fn from(language: Language) -> Self {
        LanguageDto {
            id: language.id(),
            name: language.display_name(),
            topic_count: topics_for(language).len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DifficultyDto {
    pub id: &'static str,
    pub description: &'static str,
}

impl From<Difficulty> for DifficultyDto {
    fn from(difficulty: Difficulty) -> Self {
        DifficultyDto {
            id: difficulty.id(),
            description: difficulty.rubric(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicListResponse {
    pub language: LanguageDto,
    pub topics: &'static [Topic],
}

impl From<Language> for TopicListResponse {
    fn from(language: Language) -> Self {
        TopicListResponse {
            language: language.into(),
            topics: topics_for(language),
        }
    }
}
