//! Shared application state for the web server.

use crate::config::Config;
use noctivis_llm::{GeminiBackend, OpenAiCompatibleBackend, TextGenerator};
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    /// None when no credential is configured at startup; the assistant
    /// widget renders disabled and its endpoint answers 503.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Build state from config, resolving the LLM credential exactly once.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let generator = build_generator(&config)?;
        Ok(Self { config, generator })
    }

    pub fn assistant_configured(&self) -> bool {
        self.generator.is_some()
    }
}

fn build_generator(config: &Config) -> anyhow::Result<Option<Arc<dyn TextGenerator>>> {
    let llm = &config.llm;
    let timeout = Duration::from_secs(llm.request_timeout_secs);

    match llm.provider.as_str() {
        "gemini" => match config.api_key() {
            Some(key) => {
                let backend = GeminiBackend::new(key.expose_secret(), llm.model.clone(), timeout)?;
                tracing::info!(model = %llm.model, "research assistant backed by Gemini");
                Ok(Some(Arc::new(backend)))
            }
            None => {
                tracing::warn!(
                    "No API key found in ${}; the research assistant is disabled",
                    llm.api_key_env
                );
                Ok(None)
            }
        },
        "openai_compatible" => {
            let base_url = llm
                .base_url
                .clone()
                .filter(|u| !u.is_empty())
                .ok_or_else(|| {
                    anyhow::anyhow!("llm.base_url is required for provider \"openai_compatible\"")
                })?;
            // Keyless is valid here: local LMStudio / Ollama endpoints.
            let key = config.api_key().map(|k| k.expose_secret().to_string());
            let backend = OpenAiCompatibleBackend::new(base_url, llm.model.clone(), key, timeout)?;
            tracing::info!(model = %llm.model, "research assistant backed by OpenAI-compatible endpoint");
            Ok(Some(Arc::new(backend)))
        }
        other => anyhow::bail!("Unknown llm.provider: {other}"),
    }
}

pub type SharedState = Arc<AppState>;
