#[cfg(test)]
mod tests {
    use super::super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_defaults_serve_locally() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_default_llm_is_gemini_flash() {
        let llm = LlmConfig::default();
        assert_eq!(llm.provider, "gemini");
        assert_eq!(llm.model, "gemini-3-flash-preview");
        assert_eq!(llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(llm.request_timeout_secs, 30);
        assert!(llm.base_url.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [llm]
            provider = "openai_compatible"
            base_url = "http://localhost:11434"
            model = "llama3:8b"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.provider, "openai_compatible");
        assert_eq!(config.llm.base_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(config.llm.request_timeout_secs, 30);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.llm.model, "gemini-3-flash-preview");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_api_key_read_from_named_env_var() {
        let mut config = Config::default();
        config.llm.api_key_env = "NOCTIVIS_TEST_KEY_SET".to_string();
        std::env::set_var("NOCTIVIS_TEST_KEY_SET", "sk-test");
        let key = config.api_key().expect("key should resolve");
        assert_eq!(key.expose_secret(), "sk-test");
    }

    #[test]
    fn test_empty_credential_counts_as_absent() {
        let mut config = Config::default();
        config.llm.api_key_env = "NOCTIVIS_TEST_KEY_EMPTY".to_string();
        std::env::set_var("NOCTIVIS_TEST_KEY_EMPTY", "");
        assert!(config.api_key().is_none());
    }
}
