use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const OPENROUTER_MODEL: &str = "deepseek/deepseek-chat";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const PROXYAPI_MODEL: &str = "gpt-4.1-mini";
pub const PROXYAPI_BASE_URL: &str = "https://api.proxyapi.ru/openai/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_TOKENS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    OpenRouter,
    ProxyApi,
}

impl ProviderKind {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "openrouter" => Some(ProviderKind::OpenRouter),
            "proxyapi" | "openai" => Some(ProviderKind::ProxyApi),
            _ => None,
        }
    }
}

/// Settings for one chat-completion provider.
#[derive(Clone, Debug)]
pub struct LlmProviderConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl LlmProviderConfig {
    /// Reads `{prefix}_API_KEY`, `{prefix}_MODEL`, `{prefix}_BASE_URL`,
    /// `{prefix}_TIMEOUT` and `{prefix}_MAX_TOKENS`.
    fn from_env(prefix: &str, default_model: &str, default_base_url: &str) -> Self {
        let var = |name: &str| env::var(format!("{}_{}", prefix, name)).ok();

        let timeout = match var("TIMEOUT") {
            Some(raw) => parse_duration(&raw).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring malformed {}_TIMEOUT '{}', using {:?}",
                    prefix,
                    raw,
                    DEFAULT_TIMEOUT
                );
                DEFAULT_TIMEOUT
            }),
            None => DEFAULT_TIMEOUT,
        };

        Self {
            api_key: SecretString::from(var("API_KEY").unwrap_or_default()),
            model: var("MODEL").unwrap_or_else(|| default_model.to_string()),
            base_url: var("BASE_URL").unwrap_or_else(|| default_base_url.to_string()),
            timeout,
            max_tokens: var("MAX_TOKENS")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }

    fn validate(&self, name: &str) -> AppResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(format!("{}_API_KEY is required", name)));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::ConfigError(format!("{}_MODEL is required", name)));
        }
        if self.timeout.is_zero() {
            return Err(AppError::ConfigError(format!(
                "{}_TIMEOUT must be greater than zero",
                name
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub provider: ProviderKind,
    pub openrouter: LlmProviderConfig,
    pub proxyapi: LlmProviderConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8086),
            provider: env::var("LLM_PROVIDER")
                .ok()
                .and_then(|p| ProviderKind::from_env_value(&p))
                .unwrap_or(ProviderKind::OpenRouter),
            openrouter: LlmProviderConfig::from_env(
                "OPENROUTER",
                OPENROUTER_MODEL,
                OPENROUTER_BASE_URL,
            ),
            proxyapi: LlmProviderConfig::from_env("PROXYAPI", PROXYAPI_MODEL, PROXYAPI_BASE_URL),
        }
    }

    /// Settings of the provider selected by `LLM_PROVIDER`.
    pub fn active_provider(&self) -> &LlmProviderConfig {
        match self.provider {
            ProviderKind::OpenRouter => &self.openrouter,
            ProviderKind::ProxyApi => &self.proxyapi,
        }
    }

    /// Only the selected provider has to be fully configured.
    pub fn validate(&self) -> AppResult<()> {
        match self.provider {
            ProviderKind::OpenRouter => self.openrouter.validate("OPENROUTER"),
            ProviderKind::ProxyApi => self.proxyapi.validate("PROXYAPI"),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        let provider = |model: &str, base_url: &str| LlmProviderConfig {
            api_key: SecretString::from("test-api-key".to_string()),
            model: model.to_string(),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
            max_tokens: 500,
        };

        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8086,
            provider: ProviderKind::OpenRouter,
            openrouter: provider(OPENROUTER_MODEL, "http://127.0.0.1:9/api/v1"),
            proxyapi: provider(PROXYAPI_MODEL, "http://127.0.0.1:9/openai/v1"),
        }
    }
}

/// Parses `"30s"`, `"1500ms"`, `"2m"`, `"1m30s"` or a bare number of seconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(seconds) = raw.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let mut total = Duration::ZERO;
    let mut rest = raw;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .filter(|&i| i > 0)?;
        let value: u64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value.checked_mul(60)?),
            "h" => Duration::from_secs(value.checked_mul(3600)?),
            _ => return None,
        };
        total = total.checked_add(part)?;
        rest = &rest[unit_len..];
    }
    Some(total)
}
