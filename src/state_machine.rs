//! Candidate conversation state machine
//!
//! A pure transition function over an explicit state value. The session
//! layer owns the state and carries out the returned effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{ConvState, Field, Stage};
pub use transition::transition;
