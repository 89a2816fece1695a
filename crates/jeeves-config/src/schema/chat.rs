//! Conversation memory configuration.

use serde::{Deserialize, Serialize};

/// Conversation memory settings.
///
/// `max_history_turns` counts user/assistant exchanges. A transcript
/// keeps at most twice that many messages, dropping the oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub max_history_turns: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_history_turns: 10,
        }
    }
}
