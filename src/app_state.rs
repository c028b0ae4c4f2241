use std::sync::Arc;

use crate::{
    config::{Config, ProviderKind},
    errors::{AppError, AppResult},
    services::{
        llm::{LlmPort, OpenAiCompatibleClient, OpenRouterClient},
        QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let llm: Arc<dyn LlmPort> = match config.provider {
            ProviderKind::OpenRouter => Arc::new(
                OpenRouterClient::new(&config.openrouter)
                    .map_err(|e| AppError::ConfigError(e.to_string()))?,
            ),
            ProviderKind::ProxyApi => Arc::new(OpenAiCompatibleClient::new(&config.proxyapi)),
        };

        log::info!(
            "Using LLM provider {:?} with model {}",
            config.provider,
            config.active_provider().model
        );

        Ok(Self::with_llm(config, llm))
    }

    /// Builds the state around an already constructed provider port.
    pub fn with_llm(config: Config, llm: Arc<dyn LlmPort>) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(llm)),
            config: Arc::new(config),
        }
    }
}
