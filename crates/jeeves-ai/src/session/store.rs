//! In-memory session registry keyed by `(user, model)`.
//!
//! The store hands out [`SessionHandle`] clones, so callers share one
//! underlying conversation per key. Sessions live until explicitly
//! invalidated; there is no expiry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use jeeves_common::UserId;
use tracing::debug;

use super::{ConversationKey, SessionHandle};

/// Shared map of live conversations.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<ConversationKey, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session for `key`, creating it with `factory` if absent.
    ///
    /// The map lock is held across the factory call, so concurrent callers
    /// racing on the same key observe exactly one creation.
    pub fn get_or_create<F>(&self, key: &ConversationKey, factory: F) -> SessionHandle
    where
        F: FnOnce() -> SessionHandle,
    {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.entry(key.clone()) {
            Entry::Occupied(slot) => slot.get().clone(),
            Entry::Vacant(slot) => {
                debug!(key = %key, "creating session");
                slot.insert(factory()).clone()
            }
        }
    }

    /// Drop every session belonging to `user`, across all models.
    ///
    /// Returns the number of sessions removed; zero when the user had none.
    pub fn invalidate_user(&self, user: UserId) -> usize {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|key, _| key.user != user);
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(user = %user, removed, "invalidated sessions");
        }
        removed
    }

    pub fn contains(&self, key: &ConversationKey) -> bool {
        self.sessions.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use super::*;

    #[test]
    fn get_or_create_returns_existing_session() {
        let store = SessionStore::new();
        let key = ConversationKey::new(UserId(3), "gemini-3-flash");
        let first = store.get_or_create(&key, || SessionHandle::new(key.clone()));
        let second = store.get_or_create(&key, || panic!("factory must not run again"));
        assert!(first.same_session(&second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_sessions() {
        let store = SessionStore::new();
        let a = ConversationKey::new(UserId(1), "gemini-3-flash");
        let b = ConversationKey::new(UserId(1), "gemini-3-pro-high");
        let first = store.get_or_create(&a, || SessionHandle::new(a.clone()));
        let second = store.get_or_create(&b, || SessionHandle::new(b.clone()));
        assert!(!first.same_session(&second));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_get_or_create_builds_one_session() {
        let store = Arc::new(SessionStore::new());
        let key = ConversationKey::new(UserId(7), "gemini-3-flash");
        let built = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let key = key.clone();
                let built = Arc::clone(&built);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.get_or_create(&key, || {
                        built.fetch_add(1, Ordering::SeqCst);
                        SessionHandle::new(key.clone())
                    })
                })
            })
            .collect();

        let sessions: Vec<SessionHandle> =
            workers.into_iter().map(|w| w.join().unwrap()).collect();
        assert_eq!(built.load(Ordering::SeqCst), 1);
        for pair in sessions.windows(2) {
            assert!(pair[0].same_session(&pair[1]));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalidate_user_removes_all_models_for_that_user() {
        let store = SessionStore::new();
        let alice = UserId(1);
        let bob = UserId(2);
        for model in ["gemini-3-flash", "gemini-3-pro-high"] {
            let key = ConversationKey::new(alice, model);
            store.get_or_create(&key, || SessionHandle::new(key.clone()));
        }
        let bob_key = ConversationKey::new(bob, "gemini-3-flash");
        store.get_or_create(&bob_key, || SessionHandle::new(bob_key.clone()));

        assert_eq!(store.invalidate_user(alice), 2);
        assert!(!store.contains(&ConversationKey::new(alice, "gemini-3-flash")));
        assert!(!store.contains(&ConversationKey::new(alice, "gemini-3-pro-high")));
        assert!(store.contains(&bob_key));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalidate_unknown_user_is_a_no_op() {
        let store = SessionStore::new();
        let key = ConversationKey::new(UserId(1), "gemini-3-flash");
        store.get_or_create(&key, || SessionHandle::new(key.clone()));

        assert_eq!(store.invalidate_user(UserId(99)), 0);
        assert_eq!(store.len(), 1);
    }
}
