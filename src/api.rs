//! HTTP API for candidate sessions
//!
//! A thin JSON surface: every conversational decision is made by the
//! state machine behind `Session`.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::session::SessionStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(max_sessions)),
        }
    }
}
