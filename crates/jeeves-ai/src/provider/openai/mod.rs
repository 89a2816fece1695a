//! OpenAI-compatible chat-completions client.
//!
//! Implements the `ProviderClient` trait for endpoints speaking the
//! flat `/chat/completions` dialect. Stateless: every request carries
//! the whole conversation.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
