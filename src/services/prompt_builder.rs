use crate::constants::prompts::QUESTION_GENERATOR_PROMPT;
use crate::models::dto::QuestionParams;

/// Renders the generation prompt for an already resolved request.
pub fn build_prompt(params: &QuestionParams) -> String {
    let substitutions = [
        ("{language}", params.language.display_name()),
        ("{language_id}", params.language.id()),
        ("{topic}", params.topic.name),
        ("{topic_id}", params.topic.id),
        ("{difficulty}", params.difficulty.id()),
        ("{difficulty_description}", params.difficulty.rubric()),
        ("{answer_type}", params.question_type.id()),
    ];

    substitutions
        .iter()
        .fold(QUESTION_GENERATOR_PROMPT.to_string(), |prompt, (marker, value)| {
            prompt.replace(marker, value)
        })
}
