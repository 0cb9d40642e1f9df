//! Effects produced by state transitions

use crate::state_machine::state::{Field, Stage};
use crate::validation::FieldError;

/// What a transition did, for the session layer to report
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A candidate field passed validation and was stored
    FieldRecorded { field: Field },

    /// Input for a field was rejected; the field will be asked again
    FieldRejected { field: Field, error: FieldError },

    /// The conversation moved to another stage
    StageChanged { from: Stage, to: Stage },

    /// The question set was built from the tech stack
    QuestionsGenerated { technologies: Vec<String> },

    /// An interview answer was counted
    AnswerCounted { answered: usize, total: usize },

    /// Input arrived in a state the transition table does not cover
    Unhandled { stage: Stage },

    /// All conversation state was discarded
    ConversationReset,
}

impl Effect {
    pub fn stage_changed(from: Stage, to: Stage) -> Self {
        Effect::StageChanged { from, to }
    }
}
