//! ProviderClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use jeeves_common::WireFormat;
use tracing::debug;

use crate::provider::{ProviderClient, PROBE_MAX_TOKENS, PROBE_TEXT};
use crate::session::SessionHandle;
use crate::wire::{ProviderRequest, WireMessage};
use crate::ProviderError;

use super::client::OpenAiClient;

#[async_trait]
impl ProviderClient for OpenAiClient {
    fn wire_format(&self) -> WireFormat {
        WireFormat::OpenAiFlat
    }

    /// Stateless send: the whole conversation rides in `request`, so
    /// the session is not consulted.
    async fn send(
        &self,
        model: &str,
        _session: &SessionHandle,
        request: ProviderRequest,
    ) -> Result<String, ProviderError> {
        let ProviderRequest::Flat { messages } = request else {
            return Err(ProviderError::new("flat client given a turn-based request"));
        };

        debug!(model = %model, messages = messages.len(), "chat-completions request");

        let body = self.build_request_body(model, &messages, None);
        let json = self.post_chat(&body).await?;
        Ok(self.parse_response(&json))
    }

    async fn probe(&self, model: &str) -> Result<(), ProviderError> {
        let messages = [WireMessage::new("user", PROBE_TEXT)];
        let body = self.build_request_body(model, &messages, Some(PROBE_MAX_TOKENS));

        debug!(model = %model, "chat-completions probe");

        self.post_chat(&body).await?;
        Ok(())
    }
}
