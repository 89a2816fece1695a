//! Provider clients for the upstream AI endpoint.
//!
//! Two wire dialects sit behind one trait: an OpenAI-style flat
//! chat-completions client and a Gemini-style turn-based client. The
//! dialect is decided once at startup from configuration; everything
//! above this module only sees `Arc<dyn ProviderClient>`.

mod gemini;
mod openai;

pub use gemini::{GeminiClient, GeminiConfig};
pub use openai::{OpenAiClient, OpenAiConfig};

use std::sync::Arc;

use async_trait::async_trait;
use jeeves_common::WireFormat;
use jeeves_config::ProviderConfig;
use tracing::info;

use crate::session::SessionHandle;
use crate::wire::ProviderRequest;
use crate::ProviderError;

/// Stand-in reply when the provider answers successfully but empty.
///
/// An empty body is a degenerate success, not a failure, so callers
/// get text to show instead of an error.
pub const EMPTY_REPLY_FALLBACK: &str = "no usable reply, please retry or rephrase";

// Minimal request used by connectivity probes.
pub(crate) const PROBE_TEXT: &str = "hi";
pub(crate) const PROBE_MAX_TOKENS: u32 = 10;

/// One upstream AI endpoint, wire dialect included.
///
/// Implementations return raw transport/API failures untouched;
/// turning those into user-facing text is [`crate::classify`]'s job.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// The request shape this client expects from the translator.
    fn wire_format(&self) -> WireFormat;

    /// Send one turn and return the assistant's reply text.
    ///
    /// Stateless dialects ignore `session`; session-affine dialects use
    /// it to keep their per-conversation context.
    async fn send(
        &self,
        model: &str,
        session: &SessionHandle,
        request: ProviderRequest,
    ) -> Result<String, ProviderError>;

    /// One-shot connectivity check against `model`, outside any session.
    async fn probe(&self, model: &str) -> Result<(), ProviderError>;
}

/// Build the client the config asks for. Called once at startup.
pub fn from_config(config: &ProviderConfig) -> Arc<dyn ProviderClient> {
    info!(wire = %config.wire, base_url = %config.base_url, "selecting provider client");
    match config.wire {
        WireFormat::OpenAiFlat => Arc::new(OpenAiClient::new(OpenAiConfig::from_provider(config))),
        WireFormat::TurnBased => Arc::new(GeminiClient::new(GeminiConfig::from_provider(config))),
    }
}
