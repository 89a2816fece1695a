//! Gemini-style client configuration.

use jeeves_config::ProviderConfig;

/// Gemini-style client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            api_key: String::new(),
            request_timeout_secs: 45,
            connect_timeout_secs: 10,
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    pub fn from_provider(config: &ProviderConfig) -> Self {
        Self {
            base_url: trim_trailing_slash(config.base_url.clone()),
            api_key: config.api_key.clone(),
            request_timeout_secs: config.request_timeout_secs,
            connect_timeout_secs: config.connect_timeout_secs,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

fn trim_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_provider_copies_generation_settings() {
        let mut provider = ProviderConfig::default();
        provider.max_tokens = 1024;
        provider.temperature = 0.2;
        let config = GeminiConfig::from_provider(&provider);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("http://localhost/v1").with_api_key("top-secret");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("top-secret"));
    }
}
