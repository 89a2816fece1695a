//! Gemini-style client struct, request building, and response parsing.

use serde_json::Value;

use crate::provider::EMPTY_REPLY_FALLBACK;
use crate::wire::WireMessage;
use crate::ProviderError;

use super::config::GeminiConfig;

/// Gemini-style turn-based client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }

    /// Build the JSON request body for the generateContent API.
    pub(crate) fn build_request_body(
        &self,
        contents: &[WireMessage],
        max_tokens: Option<u32>,
    ) -> Value {
        let contents: Vec<Value> = contents
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": max_tokens.unwrap_or(self.config.max_tokens),
                "temperature": self.config.temperature,
            }
        })
    }

    /// POST `body` to `model`'s generateContent endpoint and return the
    /// parsed JSON. HTTP and transport failures come back raw.
    pub(crate) async fn post_generate(
        &self,
        model: &str,
        body: &Value,
    ) -> Result<Value, ProviderError> {
        let mut request = self
            .http
            .post(self.api_url(model))
            .header("content-type", "application/json")
            .json(body);
        if !self.config.api_key.is_empty() {
            request = request.header("x-goog-api-key", &self.config.api_key);
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

    /// Pull the reply text out of a generateContent response.
    ///
    /// Safety blocks are reported as errors with "blocked" in the
    /// message; an otherwise-empty reply maps to the fixed fallback.
    pub(crate) fn parse_response(&self, json: &Value) -> Result<String, ProviderError> {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(ProviderError::new(format!(
                "prompt blocked by safety filter ({reason})"
            )));
        }

        let candidates = json["candidates"].as_array().cloned().unwrap_or_default();
        let Some(first) = candidates.first() else {
            return Ok(EMPTY_REPLY_FALLBACK.to_string());
        };

        if first["finishReason"].as_str() == Some("SAFETY") {
            return Err(ProviderError::new("response blocked by safety filter"));
        }

        let mut content = String::new();
        if let Some(parts) = first["content"]["parts"].as_array() {
            for part in parts {
                if let Some(text) = part["text"].as_str() {
                    content.push_str(text);
                }
            }
        }

        if content.trim().is_empty() {
            return Ok(EMPTY_REPLY_FALLBACK.to_string());
        }
        Ok(content)
    }
}
