//! Conversation session management.
//!
//! Sessions are keyed by (user, model) and live in memory for the
//! process lifetime; there is no expiry. Invalidation is explicit and
//! always per user, across all of that user's models.

mod handle;
mod store;

pub use handle::{ConversationKey, SessionHandle};
pub use store::SessionStore;
