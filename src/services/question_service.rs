use std::sync::Arc;

use crate::errors::{AppError, PipelineError, Stage};
use crate::models::domain::Question;
use crate::models::dto::GenerateQuestionRequest;
use crate::services::cross_validator::cross_validate;
use crate::services::llm::{LlmPort, RequestContext};
use crate::services::prompt_builder::build_prompt;
use crate::services::question_builder::build_question;
use crate::services::response_normalizer::parse_llm_response;

/// Runs the generation pipeline for one request at a time.
///
/// Holds nothing but the shared provider port, so one instance serves any
/// number of concurrent requests.
#[derive(Clone)]
pub struct QuestionService {
    llm: Arc<dyn LlmPort>,
}

impl QuestionService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn generate_question(
        &self,
        ctx: &RequestContext,
        request: &GenerateQuestionRequest,
    ) -> Result<Question, PipelineError> {
        let params = request
            .resolve()
            .map_err(|e| fail(Stage::ValidateRequest, e))?;

        log::info!(
            "Generating question: language={} topic={} difficulty={} question_type={}",
            params.language,
            params.topic.id,
            params.difficulty.id(),
            params.question_type.id()
        );

        let prompt = build_prompt(&params);

        // Adapters enforce the context themselves; this also covers ones that don't.
        let response_text = ctx
            .run(self.llm.complete(ctx, &prompt))
            .await
            .and_then(|reply| reply)
            .map_err(|e| fail(Stage::InvokeLlm, AppError::Llm(e)))?;

        log::debug!("Received LLM response ({} bytes)", response_text.len());

        let raw = parse_llm_response(&response_text)
            .map_err(|e| fail(Stage::NormalizeResponse, e))?;

        let validated =
            cross_validate(raw, &params).map_err(|e| fail(Stage::CrossValidate, e))?;

        let question = build_question(validated).map_err(|e| fail(Stage::BuildQuestion, e))?;

        log::info!("Question generated successfully: id={}", question.id);

        Ok(question)
    }
}

fn fail(stage: Stage, source: AppError) -> PipelineError {
    log::warn!("Question generation failed at {}: {}", stage, source);
    PipelineError::new(stage, source)
}
