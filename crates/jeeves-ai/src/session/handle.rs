//! Conversation identity and per-conversation state.

use std::fmt;
use std::sync::{Arc, Mutex};

use jeeves_common::UserId;

use crate::wire::WireMessage;
use crate::ChatTurn;

/// Identifies one conversation: one user talking to one model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    pub user: UserId,
    pub model: String,
}

impl ConversationKey {
    pub fn new(user: UserId, model: impl Into<String>) -> Self {
        Self {
            user,
            model: model.into(),
        }
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user, self.model)
    }
}

/// Shared handle to one conversation's state.
///
/// Cloning is cheap and every clone addresses the same state. The
/// neutral transcript is what the facade reads and commits; the
/// provider cache belongs to the session-affine client and is opaque
/// everywhere else.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<SessionState>,
}

struct SessionState {
    key: ConversationKey,
    /// Provider-neutral transcript, oldest first.
    transcript: Mutex<Vec<ChatTurn>>,
    /// Wire messages already delivered upstream (session-affine client only).
    provider_cache: Mutex<Vec<WireMessage>>,
    /// Serializes sends for this conversation.
    turn_gate: tokio::sync::Mutex<()>,
}

impl SessionHandle {
    pub fn new(key: ConversationKey) -> Self {
        Self {
            inner: Arc::new(SessionState {
                key,
                transcript: Mutex::new(Vec::new()),
                provider_cache: Mutex::new(Vec::new()),
                turn_gate: tokio::sync::Mutex::new(()),
            }),
        }
    }

    pub fn key(&self) -> &ConversationKey {
        &self.inner.key
    }

    /// True when both handles address the same underlying session.
    pub fn same_session(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Hold the returned guard to keep other turns on this conversation
    /// waiting.
    pub async fn lock_turn(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.inner.turn_gate.lock().await
    }

    /// Snapshot of the neutral transcript.
    pub fn transcript(&self) -> Vec<ChatTurn> {
        self.inner.transcript.lock().unwrap().clone()
    }

    pub fn turn_count(&self) -> usize {
        self.inner.transcript.lock().unwrap().len()
    }

    /// Record a completed exchange, dropping the oldest messages once
    /// the transcript exceeds `max_messages` (0 disables the cap).
    pub fn commit_exchange(&self, user_text: &str, assistant_text: &str, max_messages: usize) {
        let mut transcript = self.inner.transcript.lock().unwrap();
        transcript.push(ChatTurn::user(user_text));
        transcript.push(ChatTurn::assistant(assistant_text));
        if max_messages > 0 && transcript.len() > max_messages {
            let excess = transcript.len() - max_messages;
            transcript.drain(..excess);
        }
    }

    /// Build the outbound wire context: everything already delivered
    /// plus `current`. On first use the cache is seeded from `history`.
    pub fn provider_context(
        &self,
        history: &[WireMessage],
        current: WireMessage,
    ) -> Vec<WireMessage> {
        let mut cache = self.inner.provider_cache.lock().unwrap();
        if cache.is_empty() && !history.is_empty() {
            cache.extend_from_slice(history);
        }
        let mut context = cache.clone();
        context.push(current);
        context
    }

    /// Record a delivered exchange in the provider cache.
    ///
    /// Called only after the upstream accepted the request, so a failed
    /// turn is never replayed as history.
    pub fn commit_provider_exchange(&self, sent: WireMessage, reply: WireMessage) {
        let mut cache = self.inner.provider_cache.lock().unwrap();
        cache.push(sent);
        cache.push(reply);
    }

    pub fn provider_cache_len(&self) -> usize {
        self.inner.provider_cache.lock().unwrap().len()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("key", &self.inner.key)
            .field("turns", &self.turn_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn key() -> ConversationKey {
        ConversationKey::new(UserId(7), "gemini-3-flash")
    }

    #[test]
    fn conversation_key_display() {
        assert_eq!(key().to_string(), "7/gemini-3-flash");
    }

    #[test]
    fn clones_share_state() {
        let handle = SessionHandle::new(key());
        let clone = handle.clone();
        handle.commit_exchange("hi", "hello", 0);

        assert!(handle.same_session(&clone));
        assert_eq!(clone.turn_count(), 2);
    }

    #[test]
    fn distinct_sessions_are_not_the_same() {
        let a = SessionHandle::new(key());
        let b = SessionHandle::new(key());
        assert!(!a.same_session(&b));
    }

    #[test]
    fn commit_exchange_appends_in_order() {
        let handle = SessionHandle::new(key());
        handle.commit_exchange("q1", "a1", 0);
        handle.commit_exchange("q2", "a2", 0);

        let transcript = handle.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[0].text, "q1");
        assert_eq!(transcript[3].role, Role::Assistant);
        assert_eq!(transcript[3].text, "a2");
    }

    #[test]
    fn transcript_cap_drops_oldest_first() {
        let handle = SessionHandle::new(key());
        for i in 0..5 {
            handle.commit_exchange(&format!("q{i}"), &format!("a{i}"), 4);
        }

        let transcript = handle.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].text, "q3");
        assert_eq!(transcript[3].text, "a4");
    }

    #[test]
    fn provider_context_seeds_once() {
        let handle = SessionHandle::new(key());
        let history = [
            WireMessage::new("user", "u1"),
            WireMessage::new("model", "a1"),
        ];

        let first = handle.provider_context(&history, WireMessage::new("user", "u2"));
        assert_eq!(first.len(), 3);
        assert_eq!(handle.provider_cache_len(), 2);

        // A later, different history must not reseed.
        let stale = [WireMessage::new("user", "other")];
        let second = handle.provider_context(&stale, WireMessage::new("user", "u3"));
        assert_eq!(second.len(), 3);
        assert_eq!(second[0].content, "u1");
        assert_eq!(second[2].content, "u3");
    }

    #[test]
    fn commit_provider_exchange_extends_cache() {
        let handle = SessionHandle::new(key());
        handle.commit_provider_exchange(
            WireMessage::new("user", "u1"),
            WireMessage::new("model", "a1"),
        );
        handle.commit_provider_exchange(
            WireMessage::new("user", "u2"),
            WireMessage::new("model", "a2"),
        );

        let context = handle.provider_context(&[], WireMessage::new("user", "u3"));
        let contents: Vec<&str> = context.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["u1", "a1", "u2", "a2", "u3"]);
    }

    #[tokio::test]
    async fn turn_gate_is_exclusive() {
        let handle = SessionHandle::new(key());
        let guard = handle.lock_turn().await;
        assert!(handle.inner.turn_gate.try_lock().is_err());
        drop(guard);
        assert!(handle.inner.turn_gate.try_lock().is_ok());
    }
}
