//! Chat gateway facade.
//!
//! The single entry point for the messaging layer: validates the model,
//! finds or creates the session, translates history into the active
//! wire format, dispatches to the provider client, and classifies
//! failures into user-ready messages. Also tracks each user's chat-mode
//! flag and selected model.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use jeeves_common::{new_correlation_id, ConfigError, UserId};
use jeeves_config::JeevesConfig;
use tracing::{debug, warn};

use crate::classify::{classify, ClassifiedError};
use crate::models::ModelRegistry;
use crate::provider::{self, ProviderClient};
use crate::session::{ConversationKey, SessionHandle, SessionStore};
use crate::wire::to_provider_request;

/// Failure surfaced to the messaging layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The requested model is not in the registry. Detected locally,
    /// before any network call.
    #[error("unknown model: {0}")]
    InvalidModel(String),
    /// A provider failure, already classified into user-ready text.
    #[error("{}", .0.user_message)]
    Provider(ClassifiedError),
}

impl GatewayError {
    /// Whether retrying the same turn could plausibly succeed.
    pub fn retryable(&self) -> bool {
        match self {
            GatewayError::InvalidModel(_) => false,
            GatewayError::Provider(classified) => classified.retryable,
        }
    }
}

/// Per-user gateway state.
#[derive(Debug, Clone)]
struct UserState {
    chat_mode: bool,
    model: String,
}

/// Facade tying registry, session store, and provider client together.
pub struct ChatGateway {
    registry: ModelRegistry,
    store: SessionStore,
    provider: Arc<dyn ProviderClient>,
    users: Mutex<HashMap<UserId, UserState>>,
    /// Transcript cap in messages (two per exchange). Zero disables.
    max_transcript_messages: usize,
}

impl ChatGateway {
    pub fn new(
        registry: ModelRegistry,
        store: SessionStore,
        provider: Arc<dyn ProviderClient>,
        max_history_turns: u32,
    ) -> Self {
        Self {
            registry,
            store,
            provider,
            users: Mutex::new(HashMap::new()),
            max_transcript_messages: (max_history_turns as usize).saturating_mul(2),
        }
    }

    /// Build a gateway from loaded configuration. The wire dialect is
    /// fixed here; swapping it is a config change, not a code change.
    pub fn from_config(config: &JeevesConfig) -> Result<Self, ConfigError> {
        let registry = ModelRegistry::from_config(&config.models)?;
        let client = provider::from_config(&config.provider);
        Ok(Self::new(
            registry,
            SessionStore::new(),
            client,
            config.chat.max_history_turns,
        ))
    }

    /// Run one conversational turn for `user` against `model`.
    ///
    /// The transcript is committed only after the provider answered, so
    /// a failed turn leaves no trace in history.
    pub async fn converse(
        &self,
        user: UserId,
        model: &str,
        text: &str,
    ) -> Result<String, GatewayError> {
        if !self.registry.is_valid(model) {
            return Err(GatewayError::InvalidModel(model.to_string()));
        }

        let key = ConversationKey::new(user, model);
        let session = self
            .store
            .get_or_create(&key, || SessionHandle::new(key.clone()));

        // One in-flight turn per conversation; a second call on the
        // same key waits here instead of racing the provider context.
        let _turn = session.lock_turn().await;

        let corr = new_correlation_id();
        debug!(corr = %corr, user = %user, model = %model, "dispatching turn");

        let prior = session.transcript();
        let request = to_provider_request(&prior, text, self.provider.wire_format());

        match self.provider.send(model, &session, request).await {
            Ok(reply) => {
                session.commit_exchange(text, &reply, self.max_transcript_messages);
                debug!(corr = %corr, reply_chars = reply.len(), "turn complete");
                Ok(reply)
            }
            Err(raw) => {
                let classified = classify(&raw);
                warn!(
                    corr = %corr,
                    kind = ?classified.kind,
                    retryable = classified.retryable,
                    error = %raw,
                    "turn failed"
                );
                Err(GatewayError::Provider(classified))
            }
        }
    }

    /// Flip chat mode. Both directions invalidate the user's sessions,
    /// so turning chat on always starts from a clean conversation.
    pub fn set_chat_mode(&self, user: UserId, on: bool) {
        let removed = self.store.invalidate_user(user);
        let mut users = self.users.lock().unwrap();
        let state = users.entry(user).or_insert_with(|| UserState {
            chat_mode: false,
            model: self.registry.default_model().id.clone(),
        });
        state.chat_mode = on;
        debug!(user = %user, on, removed, "chat mode changed");
    }

    /// Select `model` for `user`. Existing sessions stay addressable;
    /// switching away and back later resumes the old conversation.
    pub fn switch_model(&self, user: UserId, model: &str) -> Result<(), GatewayError> {
        if !self.registry.is_valid(model) {
            return Err(GatewayError::InvalidModel(model.to_string()));
        }
        let mut users = self.users.lock().unwrap();
        let state = users.entry(user).or_insert_with(|| UserState {
            chat_mode: false,
            model: self.registry.default_model().id.clone(),
        });
        state.model = model.to_string();
        debug!(user = %user, model = %model, "model selected");
        Ok(())
    }

    pub fn chat_mode(&self, user: UserId) -> bool {
        self.users
            .lock()
            .unwrap()
            .get(&user)
            .map(|state| state.chat_mode)
            .unwrap_or(false)
    }

    pub fn selected_model(&self, user: UserId) -> String {
        self.users
            .lock()
            .unwrap()
            .get(&user)
            .map(|state| state.model.clone())
            .unwrap_or_else(|| self.registry.default_model().id.clone())
    }

    /// Drop every session for `user`, returning how many were removed.
    pub fn reset_conversation(&self, user: UserId) -> usize {
        self.store.invalidate_user(user)
    }

    pub fn is_valid_model(&self, name: &str) -> bool {
        self.registry.is_valid(name)
    }

    /// Human-readable model listing for the messaging layer.
    pub fn list_models(&self) -> String {
        self.registry.summary()
    }

    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Probe the default model once, outside any session.
    pub async fn test_connectivity(&self) -> (bool, String) {
        let model = &self.registry.default_model().id;
        match self.provider.probe(model).await {
            Ok(()) => (true, format!("API connection OK (model: {model})")),
            Err(raw) => {
                let classified = classify(&raw);
                warn!(kind = ?classified.kind, error = %raw, "connectivity probe failed");
                (false, classified.user_message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::ProviderRequest;
    use crate::ProviderError;
    use async_trait::async_trait;
    use jeeves_common::WireFormat;
    use jeeves_config::ModelsConfig;

    /// Provider stub for the state reads and transitions that never
    /// reach the network.
    struct NullClient;

    #[async_trait]
    impl ProviderClient for NullClient {
        fn wire_format(&self) -> WireFormat {
            WireFormat::OpenAiFlat
        }

        async fn send(
            &self,
            _model: &str,
            _session: &SessionHandle,
            _request: ProviderRequest,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::new("no provider behind this gateway"))
        }

        async fn probe(&self, _model: &str) -> Result<(), ProviderError> {
            Ok(())
        }
    }

    fn gateway() -> ChatGateway {
        let models = ModelsConfig {
            default: "m-default".into(),
            allowed: vec!["m-default".into(), "m-other".into()],
        };
        ChatGateway::new(
            ModelRegistry::from_config(&models).unwrap(),
            SessionStore::new(),
            Arc::new(NullClient),
            10,
        )
    }

    #[test]
    fn chat_mode_starts_off_and_flips_both_ways() {
        let gateway = gateway();
        let user = UserId(1);

        assert!(!gateway.chat_mode(user));
        gateway.set_chat_mode(user, true);
        assert!(gateway.chat_mode(user));
        gateway.set_chat_mode(user, false);
        assert!(!gateway.chat_mode(user));
    }

    #[test]
    fn selected_model_defaults_then_tracks_switches() {
        let gateway = gateway();
        let user = UserId(2);

        assert_eq!(gateway.selected_model(user), "m-default");
        gateway.switch_model(user, "m-other").unwrap();
        assert_eq!(gateway.selected_model(user), "m-other");
    }

    #[test]
    fn rejected_switch_keeps_the_previous_selection() {
        let gateway = gateway();
        let user = UserId(3);
        gateway.switch_model(user, "m-other").unwrap();

        let err = gateway.switch_model(user, "m-unknown").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidModel(_)));
        assert!(!err.retryable());
        assert_eq!(gateway.selected_model(user), "m-other");
    }

    #[test]
    fn enabling_chat_keeps_an_existing_model_selection() {
        let gateway = gateway();
        let user = UserId(4);
        gateway.switch_model(user, "m-other").unwrap();

        gateway.set_chat_mode(user, true);
        assert!(gateway.chat_mode(user));
        assert_eq!(gateway.selected_model(user), "m-other");
    }

    #[test]
    fn users_do_not_share_mode_or_selection() {
        let gateway = gateway();
        gateway.set_chat_mode(UserId(5), true);
        gateway.switch_model(UserId(5), "m-other").unwrap();

        assert!(!gateway.chat_mode(UserId(6)));
        assert_eq!(gateway.selected_model(UserId(6)), "m-default");
    }
}
