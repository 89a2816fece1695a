//! Upstream AI endpoint configuration.

use jeeves_common::WireFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for the upstream AI endpoint.
///
/// The default `base_url` points at a local OpenAI-compatible proxy.
/// The API key normally arrives through `JEEVES_API_KEY` rather than
/// being written into the file; an empty key means no auth header is
/// sent, which local proxies accept.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    /// Request shape the endpoint speaks: `"openai-flat"` or `"turn-based"`.
    pub wire: WireFormat,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Generation cap forwarded on turn-based requests.
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8045/v1".into(),
            api_key: String::new(),
            wire: WireFormat::default(),
            request_timeout_secs: 45,
            connect_timeout_secs: 10,
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

// Manual Debug so the api key never lands in logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("wire", &self.wire)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}
