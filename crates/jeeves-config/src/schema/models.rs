//! Model allow-list configuration.

use serde::{Deserialize, Serialize};

/// Which models users may select, and which one new users start on.
///
/// `allowed` is an ordered catalog: listings show it exactly as written
/// here. `default` must name one of its entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub default: String,
    pub allowed: Vec<String>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default: "gemini-3-flash".into(),
            allowed: vec![
                "gemini-3-flash".into(),
                "gemini-3-pro-high".into(),
                "gemini-3-pro-low".into(),
                "gemini-3-pro-image".into(),
                "gemini-2.5-flash".into(),
                "gemini-2.5-flash-thinking".into(),
                "claude-sonnet-4-5".into(),
                "claude-sonnet-4-5-thinking".into(),
                "claude-opus-4-5-thinking".into(),
            ],
        }
    }
}
