//! OpenAI-compatible client struct, request building, and response parsing.

use serde_json::Value;

use crate::provider::EMPTY_REPLY_FALLBACK;
use crate::wire::WireMessage;
use crate::ProviderError;

use super::config::OpenAiConfig;

/// OpenAI-compatible chat-completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build the JSON request body for the chat-completions API.
    pub(crate) fn build_request_body(
        &self,
        model: &str,
        messages: &[WireMessage],
        max_tokens: Option<u32>,
    ) -> Value {
        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
        });
        if let Some(max_tokens) = max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        body
    }

    /// POST `body` to the chat-completions endpoint and return the
    /// parsed JSON. HTTP and transport failures come back raw.
    pub(crate) async fn post_chat(&self, body: &Value) -> Result<Value, ProviderError> {
        let mut request = self
            .http
            .post(self.api_url())
            .header("content-type", "application/json")
            .json(body);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request.send().await.map_err(ProviderError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ProviderError::with_status(
                status.as_u16(),
                format!("HTTP {status}: {text}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("response parse error: {e}")))
    }

    /// Pull the reply text out of a chat-completions response.
    ///
    /// A well-formed response with no text is not an error; the caller
    /// gets the fixed fallback instead.
    pub(crate) fn parse_response(&self, json: &Value) -> String {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default();
        if content.trim().is_empty() {
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            content.to_string()
        }
    }
}
