use serde::{Deserialize, Serialize};
use std::fmt;

/// Which request shape the upstream AI endpoint speaks.
///
/// `OpenAiFlat` is the chat-completions style: one flat message list per
/// request. `TurnBased` is the Gemini style: a seeded history plus the
/// newest user message per turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireFormat {
    // Spelled as one word on the wire; kebab-case would split it.
    #[default]
    #[serde(rename = "openai-flat")]
    OpenAiFlat,
    TurnBased,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::OpenAiFlat => write!(f, "openai-flat"),
            WireFormat::TurnBased => write!(f, "turn-based"),
        }
    }
}
