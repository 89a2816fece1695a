//! ProviderClient trait implementation for GeminiClient.

use async_trait::async_trait;
use jeeves_common::WireFormat;
use tracing::debug;

use crate::provider::{ProviderClient, PROBE_MAX_TOKENS, PROBE_TEXT};
use crate::session::SessionHandle;
use crate::wire::{ProviderRequest, WireMessage};
use crate::ProviderError;

use super::client::GeminiClient;

#[async_trait]
impl ProviderClient for GeminiClient {
    fn wire_format(&self) -> WireFormat {
        WireFormat::TurnBased
    }

    /// Session-affine send: the first turn on a session seeds its wire
    /// context from the translated history, later turns replay the
    /// session's own context plus the newest message. The exchange is
    /// committed to the session only after the upstream answered.
    async fn send(
        &self,
        model: &str,
        session: &SessionHandle,
        request: ProviderRequest,
    ) -> Result<String, ProviderError> {
        let ProviderRequest::TurnBased { history, current } = request else {
            return Err(ProviderError::new("turn-based client given a flat request"));
        };

        let outbound = WireMessage::new("user", current);
        let contents = session.provider_context(&history, outbound.clone());

        debug!(model = %model, contents = contents.len(), "generateContent request");

        let body = self.build_request_body(&contents, None);
        let json = self.post_generate(model, &body).await?;
        let reply = self.parse_response(&json)?;

        session.commit_provider_exchange(outbound, WireMessage::new("model", reply.clone()));
        Ok(reply)
    }

    async fn probe(&self, model: &str) -> Result<(), ProviderError> {
        let contents = [WireMessage::new("user", PROBE_TEXT)];
        let body = self.build_request_body(&contents, Some(PROBE_MAX_TOKENS));

        debug!(model = %model, "generateContent probe");

        let json = self.post_generate(model, &body).await?;
        self.parse_response(&json)?;
        Ok(())
    }
}
