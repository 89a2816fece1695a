//! Gemini-style turn-based client.
//!
//! Implements the `ProviderClient` trait for endpoints speaking the
//! `models/{model}:generateContent` dialect. Session-affine: the first
//! turn seeds the session's provider context from translated history,
//! later turns replay that context plus the newest message.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
