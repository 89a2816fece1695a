//! Translation from neutral transcripts to provider wire shapes.
//!
//! Pure functions, no IO. Replies come back as raw assistant text, so
//! there is no inverse mapping.

use jeeves_common::WireFormat;
use serde::Serialize;

use crate::{ChatTurn, Role};

/// One message in provider wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl WireMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// A fully translated request, ready for a provider client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRequest {
    /// Whole conversation in one flat list, OpenAI style.
    Flat { messages: Vec<WireMessage> },
    /// Prior turns split from the newest message, Gemini style.
    TurnBased {
        history: Vec<WireMessage>,
        current: String,
    },
}

/// Translate prior turns plus the newest user text into `format`.
///
/// The newest text is a separate argument on purpose: a conversation
/// always ends with a user turn, and this signature makes the empty
/// conversation unrepresentable instead of runtime-checked.
pub fn to_provider_request(
    prior: &[ChatTurn],
    current: &str,
    format: WireFormat,
) -> ProviderRequest {
    match format {
        WireFormat::OpenAiFlat => {
            let mut messages: Vec<WireMessage> = prior
                .iter()
                .map(|turn| WireMessage::new(flat_role(turn.role), turn.text.clone()))
                .collect();
            messages.push(WireMessage::new("user", current));
            ProviderRequest::Flat { messages }
        }
        WireFormat::TurnBased => {
            let history = prior
                .iter()
                .map(|turn| WireMessage::new(turn_role(turn.role), turn.text.clone()))
                .collect();
            ProviderRequest::TurnBased {
                history,
                current: current.to_string(),
            }
        }
    }
}

fn flat_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

// Turn-based endpoints say "model" where flat ones say "assistant".
fn turn_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prior() -> Vec<ChatTurn> {
        vec![ChatTurn::user("one"), ChatTurn::assistant("two")]
    }

    #[test]
    fn turn_based_splits_history_from_current() {
        let request = to_provider_request(&prior(), "three", WireFormat::TurnBased);
        let ProviderRequest::TurnBased { history, current } = request else {
            panic!("expected turn-based request");
        };

        assert_eq!(history.len(), 2);
        assert_eq!(history[0], WireMessage::new("user", "one"));
        assert_eq!(history[1], WireMessage::new("model", "two"));
        assert_eq!(current, "three");
    }

    #[test]
    fn turn_based_single_turn_has_empty_history() {
        let request = to_provider_request(&[], "hello", WireFormat::TurnBased);
        let ProviderRequest::TurnBased { history, current } = request else {
            panic!("expected turn-based request");
        };

        assert!(history.is_empty());
        assert_eq!(current, "hello");
    }

    #[test]
    fn flat_preserves_length_order_and_roles() {
        let request = to_provider_request(&prior(), "three", WireFormat::OpenAiFlat);
        let ProviderRequest::Flat { messages } = request else {
            panic!("expected flat request");
        };

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], WireMessage::new("user", "one"));
        assert_eq!(messages[1], WireMessage::new("assistant", "two"));
        assert_eq!(messages[2], WireMessage::new("user", "three"));
    }

    #[test]
    fn flat_single_turn_is_one_user_message() {
        let request = to_provider_request(&[], "hello", WireFormat::OpenAiFlat);
        let ProviderRequest::Flat { messages } = request else {
            panic!("expected flat request");
        };

        assert_eq!(messages, vec![WireMessage::new("user", "hello")]);
    }

    #[test]
    fn longer_alternation_keeps_order_in_both_shapes() {
        let turns = vec![
            ChatTurn::user("u1"),
            ChatTurn::assistant("a1"),
            ChatTurn::user("u2"),
            ChatTurn::assistant("a2"),
        ];

        let ProviderRequest::Flat { messages } =
            to_provider_request(&turns, "u3", WireFormat::OpenAiFlat)
        else {
            panic!("expected flat request");
        };
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["u1", "a1", "u2", "a2", "u3"]);

        let ProviderRequest::TurnBased { history, current } =
            to_provider_request(&turns, "u3", WireFormat::TurnBased)
        else {
            panic!("expected turn-based request");
        };
        let roles: Vec<&str> = history.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "model", "user", "model"]);
        assert_eq!(current, "u3");
    }

    #[test]
    fn wire_message_serializes_to_role_content_pair() {
        let msg = WireMessage::new("user", "hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }
}
