//! TextGenerator trait and concrete implementations.
//!
//! Backends:
//!   GeminiBackend           — Google Gemini API (gemini-3-flash-preview, …)
//!   OpenAiCompatibleBackend — any OpenAI-compatible /v1/chat/completions
//!                             endpoint (LMStudio, Ollama, Groq, vLLM, …)
//!
//! Both carry an explicit request timeout on their HTTP client; a timed-out
//! call surfaces as `LlmError::Http` like any other transport failure.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A service that completes a single prompt into plain text.
///
/// An empty reply is a successful outcome, not an error; callers decide what
/// an empty string means for them.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
    fn model_id(&self) -> &str;
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

async fn check_response_status(resp: reqwest::Response) -> Result<Value, LlmError> {
    let status = resp.status().as_u16();
    let body: Value = resp.json().await?;
    if status >= 400 {
        let msg = body["error"]["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown API error")
            .to_string();
        return Err(LlmError::ApiError { status, message: msg });
    }
    Ok(body)
}

/// Pull the reply text out of a Gemini `generateContent` body.
fn extract_gemini_text(json: &Value) -> String {
    json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .to_string()
}

/// Pull the reply text out of an OpenAI-style chat-completion body.
fn extract_chat_text(json: &Value) -> String {
    json["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string()
}

// ── 1. Google Gemini ──────────────────────────────────────────────────────────

pub struct GeminiBackend {
    pub model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            client: client_with_timeout(timeout)?,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        let resp = self.client.post(&url).json(&body).send().await?;
        let json = check_response_status(resp).await?;
        Ok(extract_gemini_text(&json))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ── 2. OpenAI-compatible (LMStudio, Ollama, Groq, vLLM, …) ───────────────────

pub struct OpenAiCompatibleBackend {
    pub base_url: String,
    pub model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiCompatibleBackend {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            client: client_with_timeout(timeout)?,
        })
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(k) => req.bearer_auth(k),
            None => req,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleBackend {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model":    &self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });
        let resp = self.auth(self.client.post(&url)).json(&body).send().await?;
        let json = check_response_status(resp).await?;
        Ok(extract_chat_text(&json))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_gemini_backend_model_id() {
        let b = GeminiBackend::new("AIza-test", "gemini-3-flash-preview", TIMEOUT).unwrap();
        assert_eq!(b.model_id(), "gemini-3-flash-preview");
    }

    #[test]
    fn test_openai_compatible_with_no_key() {
        // No API key is valid for LMStudio / vLLM
        let b = OpenAiCompatibleBackend::new("http://localhost:1234", "local-model", None, TIMEOUT)
            .unwrap();
        assert_eq!(b.model_id(), "local-model");
    }

    #[test]
    fn test_extract_gemini_text() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "He uses frequency-domain priors." }] }
            }]
        });
        assert_eq!(extract_gemini_text(&json), "He uses frequency-domain priors.");
    }

    #[test]
    fn test_extract_gemini_text_missing_candidates_is_empty() {
        let json = serde_json::json!({ "candidates": [] });
        assert_eq!(extract_gemini_text(&json), "");
    }

    #[test]
    fn test_extract_chat_text() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "hello" } }]
        });
        assert_eq!(extract_chat_text(&json), "hello");
    }
}
