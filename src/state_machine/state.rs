//! Conversation state types

use crate::messages;
use crate::questions::{calculate_progress, QuestionSet};
use crate::validation::{parse_experience, parse_tech_stack, validate_email, validate_phone, FieldError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Candidate Record
// ============================================================================

/// A candidate detail collected during the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
}

impl Field {
    /// Fields requested after the name, in asking order
    pub const COLLECTION_ORDER: [Field; 6] = [
        Field::Email,
        Field::Phone,
        Field::Experience,
        Field::Position,
        Field::Location,
        Field::TechStack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Experience => "experience",
            Field::Position => "position",
            Field::Location => "location",
            Field::TechStack => "tech_stack",
        }
    }
}

/// Candidate profile. Each slot is written once, after its value validates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub(super) full_name: Option<String>,
    pub(super) email: Option<String>,
    pub(super) phone: Option<String>,
    pub(super) experience: Option<f64>,
    pub(super) position: Option<String>,
    pub(super) location: Option<String>,
    pub(super) tech_stack: Option<Vec<String>>,
}

impl CandidateRecord {
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn experience(&self) -> Option<f64> {
        self.experience
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn tech_stack(&self) -> Option<&[String]> {
        self.tech_stack.as_deref()
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::FullName => self.full_name.is_some(),
            Field::Email => self.email.is_some(),
            Field::Phone => self.phone.is_some(),
            Field::Experience => self.experience.is_some(),
            Field::Position => self.position.is_some(),
            Field::Location => self.location.is_some(),
            Field::TechStack => self.tech_stack.is_some(),
        }
    }

    /// First field in `Field::COLLECTION_ORDER` that has no value yet.
    pub fn next_unset_field(&self) -> Option<Field> {
        Field::COLLECTION_ORDER
            .into_iter()
            .find(|field| !self.is_set(*field))
    }

    /// Validate `value` for `field` and store it trimmed. The record is
    /// untouched when validation fails.
    pub(super) fn record(&mut self, field: Field, raw: &str) -> Result<(), FieldError> {
        debug_assert!(!self.is_set(field), "{} recorded twice", field.name());
        let value = raw.trim();
        match field {
            // Only a truly empty message is refused; whitespace stores ""
            Field::FullName => {
                if raw.is_empty() {
                    return Err(FieldError::EmptyName);
                }
                self.full_name = Some(value.to_string());
            }
            Field::Email => {
                if !validate_email(value) {
                    return Err(FieldError::InvalidEmail);
                }
                self.email = Some(value.to_string());
            }
            Field::Phone => {
                if !validate_phone(value) {
                    return Err(FieldError::InvalidPhone);
                }
                self.phone = Some(value.to_string());
            }
            Field::Experience => self.experience = Some(parse_experience(value)?),
            Field::Position => self.position = Some(value.to_string()),
            Field::Location => self.location = Some(value.to_string()),
            Field::TechStack => {
                let techs = parse_tech_stack(value);
                if techs.is_empty() {
                    return Err(FieldError::EmptyTechStack);
                }
                self.tech_stack = Some(techs);
            }
        }
        Ok(())
    }

    /// Collected fields in collection order, formatted for display
    pub fn profile(&self) -> Vec<(Field, String)> {
        [
            (Field::FullName, self.full_name().map(String::from)),
            (Field::Email, self.email().map(String::from)),
            (Field::Phone, self.phone().map(String::from)),
            (Field::Experience, self.experience().map(messages::format_years)),
            (Field::Position, self.position().map(String::from)),
            (Field::Location, self.location().map(String::from)),
            (Field::TechStack, self.tech_stack().map(|techs| techs.join(", "))),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }

    /// Closing summary of name, experience, tech stack and location.
    pub fn completion_summary(&self) -> String {
        let experience = self
            .experience
            .map_or_else(|| messages::NOT_AVAILABLE.to_string(), messages::format_years);
        let tech_stack = self
            .tech_stack
            .as_ref()
            .map(|techs| techs.join(", "))
            .unwrap_or_default();

        messages::interview_complete(
            self.full_name().unwrap_or(messages::NOT_AVAILABLE),
            &experience,
            &tech_stack,
            self.location().unwrap_or(messages::NOT_AVAILABLE),
        )
    }
}

// ============================================================================
// Conversation State
// ============================================================================

/// Conversation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for the candidate's name
    #[default]
    Greeting,

    /// Asking for contact and experience details one field at a time
    CollectingInfo,

    /// Tech stack recorded, first question not yet asked
    GeneratingQuestions,

    /// Asking technical questions
    TechnicalInterview {
        /// Answers submitted so far
        cursor: usize,
    },

    /// All questions answered
    Completion,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Greeting => "greeting",
            Stage::CollectingInfo => "collecting_info",
            Stage::GeneratingQuestions => "generating_questions",
            Stage::TechnicalInterview { .. } => "technical_interview",
            Stage::Completion => "completion",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Completion)
    }
}

/// Everything a conversation remembers between turns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvState {
    pub(super) stage: Stage,
    pub(super) record: CandidateRecord,
    /// Built once, on the first turn in `GeneratingQuestions`
    pub(super) questions: Option<QuestionSet>,
}

impl ConvState {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    pub fn questions(&self) -> Option<&QuestionSet> {
        self.questions.as_ref()
    }

    /// Share of technical questions answered
    pub fn progress(&self) -> f64 {
        if self.stage.is_terminal() {
            return 1.0;
        }
        match (self.stage, &self.questions) {
            (Stage::TechnicalInterview { cursor }, Some(questions)) => {
                calculate_progress(cursor, questions.total_questions())
            }
            _ => 0.0,
        }
    }
}
