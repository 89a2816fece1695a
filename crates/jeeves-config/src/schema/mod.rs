//! Configuration schema types for Jeeves.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching a stock deployment
//! against a local OpenAI-compatible proxy.

mod chat;
mod defaults;
mod models;
mod provider;

pub use chat::*;
pub use defaults::*;
pub use models::*;
pub use provider::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Jeeves.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct JeevesConfig {
    pub provider: ProviderConfig,
    pub models: ModelsConfig,
    pub chat: ChatConfig,
    pub defaults: DefaultsConfig,
}

// =============================================================================
// Tests
// =============================================================================
