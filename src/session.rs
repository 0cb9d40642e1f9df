//! Candidate sessions
//!
//! A session owns one conversation: its state machine value and the message
//! log shown to the candidate. `SessionStore` keeps every live session in
//! memory; nothing outlives the process. When the store is full, the least
//! recently active idle session makes room for a new one.

use crate::messages;
use crate::state_machine::{transition, ConvState, Effect, Event};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the message log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A single candidate conversation
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    state: ConvState,
    messages: Vec<Message>,
    last_active: DateTime<Utc>,
}

impl Session {
    /// Fresh session whose log opens with the greeting.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: ConvState::default(),
            messages: vec![Message::new(Role::Assistant, messages::GREETING)],
            last_active: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ConvState {
        &self.state
    }

    /// The log is observational: the state machine never reads it.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Run one candidate turn and return the reply.
    pub fn handle_user_input(&mut self, text: &str) -> String {
        self.last_active = Utc::now();
        self.messages.push(Message::new(Role::User, text));
        let reply = self.apply(Event::user_input(text));
        self.messages.push(Message::new(Role::Assistant, reply.clone()));
        reply
    }

    /// Discard the conversation and start again at the greeting.
    pub fn reset(&mut self) {
        self.last_active = Utc::now();
        let result = transition(&self.state, Event::Reset);
        self.log_effects(&result.effects);
        // State and log are replaced together under the session lock
        self.state = result.new_state;
        self.messages = vec![Message::new(Role::Assistant, result.reply)];
    }

    fn apply(&mut self, event: Event) -> String {
        let result = transition(&self.state, event);
        self.log_effects(&result.effects);
        self.state = result.new_state;
        result.reply
    }

    fn log_effects(&self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::FieldRecorded { field } => {
                    tracing::info!(session_id = %self.id, field = field.name(), "Field recorded");
                }
                Effect::FieldRejected { field, error } => {
                    tracing::debug!(
                        session_id = %self.id,
                        field = field.name(),
                        reason = ?error,
                        "Field rejected"
                    );
                }
                Effect::StageChanged { from, to } => {
                    tracing::info!(
                        session_id = %self.id,
                        from = from.name(),
                        to = to.name(),
                        "Stage changed"
                    );
                }
                Effect::QuestionsGenerated { technologies } => {
                    tracing::info!(
                        session_id = %self.id,
                        technologies = ?technologies,
                        "Questions generated"
                    );
                }
                Effect::AnswerCounted { answered, total } => {
                    tracing::debug!(session_id = %self.id, answered, total, "Answer counted");
                }
                Effect::Unhandled { stage } => {
                    tracing::warn!(
                        session_id = %self.id,
                        stage = stage.name(),
                        "Input not handled in current state"
                    );
                }
                Effect::ConversationReset => {
                    tracing::info!(session_id = %self.id, "Conversation reset");
                }
            }
        }
    }
}

// ============================================================================
// Session Store
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session {0} not found")]
    NotFound(String),
    #[error("Session limit of {0} reached")]
    Full(usize),
}

/// Shared handle to one session; the lock serializes its turns
pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory registry of live sessions
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    /// Start a new session with a random id. A full store evicts its least
    /// recently active idle session first; `Full` means every session is
    /// mid-turn.
    pub async fn create(&self) -> Result<SessionHandle, StoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            let Some(idle_id) = least_recently_active(&sessions) else {
                tracing::warn!(max_sessions = self.max_sessions, "Session limit reached");
                return Err(StoreError::Full(self.max_sessions));
            };
            sessions.remove(&idle_id);
            tracing::info!(session_id = %idle_id, "Evicted least recently active session");
        }

        let id = uuid::Uuid::new_v4().to_string();
        let handle = Arc::new(Mutex::new(Session::new(id.clone())));
        sessions.insert(id.clone(), handle.clone());
        tracing::info!(session_id = %id, active = sessions.len(), "Session created");
        Ok(handle)
    }

    pub async fn get(&self, id: &str) -> Result<SessionHandle, StoreError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let removed = self.sessions.write().await.remove(id);
        match removed {
            Some(_) => {
                tracing::info!(session_id = %id, "Session removed");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

/// Id of the idle session with the oldest activity. Sessions whose lock is
/// held are mid-turn and never chosen.
fn least_recently_active(sessions: &HashMap<String, SessionHandle>) -> Option<String> {
    sessions
        .iter()
        .filter_map(|(id, handle)| {
            let session = handle.try_lock().ok()?;
            Some((session.last_active(), id))
        })
        .min_by_key(|(last_active, _)| *last_active)
        .map(|(_, id)| id.clone())
}
