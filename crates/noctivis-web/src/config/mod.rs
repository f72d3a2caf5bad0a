//! Configuration loading for Noctivis.
//! Reads noctivis.toml from the current directory or path in NOCTIVIS_CONFIG env var.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "gemini" or "openai_compatible"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API credential.
    /// The variable is read once at startup, never per request.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Required for "openai_compatible"; ignored for "gemini".
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider()     -> String { "gemini".to_string() }
fn default_model()        -> String { "gemini-3-flash-preview".to_string() }
fn default_api_key_env()  -> String { "GEMINI_API_KEY".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: None,
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

mod tests;

impl Config {
    /// Load configuration from noctivis.toml.
    /// Checks NOCTIVIS_CONFIG env var first, then the current directory.
    /// A missing file falls back to defaults so the static site always serves.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("NOCTIVIS_CONFIG")
            .unwrap_or_else(|_| "noctivis.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::info!("No config file at {}; using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the API credential named by `llm.api_key_env`.
    /// Absence is a startup condition, not a per-request failure.
    pub fn api_key(&self) -> Option<SecretString> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from)
    }
}
