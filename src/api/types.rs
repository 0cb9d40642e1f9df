//! API request and response types

use crate::session::{Message, Session};
use crate::state_machine::{Field, Stage};
use serde::{Deserialize, Serialize};

/// Request to send one line of candidate input
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// One collected profile field
#[derive(Debug, Serialize)]
pub struct ProfileEntry {
    pub field: Field,
    pub value: String,
}

/// Everything the chat surface needs to render a session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub stage: Stage,
    pub messages: Vec<Message>,
    pub profile: Vec<ProfileEntry>,
    /// Interview order, empty until the first question is asked
    pub technologies: Vec<String>,
    /// Share of technical questions answered, 0.0 to 1.0
    pub progress: f64,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        let state = session.state();
        Self {
            id: session.id().to_string(),
            stage: state.stage(),
            messages: session.messages().to_vec(),
            profile: state
                .record()
                .profile()
                .into_iter()
                .map(|(field, value)| ProfileEntry { field, value })
                .collect(),
            technologies: state
                .questions()
                .map(|questions| questions.technologies().into_iter().map(String::from).collect())
                .unwrap_or_default(),
            progress: state.progress(),
        }
    }
}

/// Response for a chat turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub session: SessionSnapshot,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
