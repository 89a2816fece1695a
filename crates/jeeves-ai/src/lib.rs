//! AI conversation gateway for Jeeves.
//!
//! Sits between a messaging front-end and an upstream AI endpoint with:
//! - A fixed, ordered model catalog with exact-match validation
//! - Per-user, per-model conversation sessions (memory only, no TTL)
//! - Two wire formats: OpenAI-flat and Gemini turn-based
//! - Substring-based error classification with user-ready messages
//!
//! The messaging layer owns delivery, rendering, and command parsing;
//! this crate owns everything between "user sent text" and "assistant
//! replied".

pub mod classify;
pub mod gateway;
pub mod models;
pub mod provider;
pub mod session;
pub mod wire;

pub use classify::{classify, ClassifiedError, ErrorKind};
pub use gateway::{ChatGateway, GatewayError};
pub use models::{ModelDescriptor, ModelRegistry};
pub use provider::{
    GeminiClient, GeminiConfig, OpenAiClient, OpenAiConfig, ProviderClient, EMPTY_REPLY_FALLBACK,
};
pub use session::{ConversationKey, SessionHandle, SessionStore};
pub use wire::{to_provider_request, ProviderRequest, WireMessage};

/// One conversational turn, provider-neutral.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Raw failure from a provider client, before classification.
///
/// Clients report what happened without deciding what to tell the user.
/// [`classify`] turns this into a user-ready message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub status: Option<u16>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Normalize a transport error so classification can read it.
    ///
    /// Timeouts and refused connections get stable wording; the
    /// classifier keys off "timed out" and "connection".
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            format!("network error: {err}")
        };
        Self { status, message }
    }
}
