//! Pure state transition function
//!
//! Given the same state and event this always produces the same reply,
//! new state and effects. Validation failures are replies, never errors.

use super::state::Field;
use super::{ConvState, Effect, Event, Stage};
use crate::messages;
use crate::questions::{
    current_tech_and_question, generate_questions, is_interview_complete, QUESTIONS_PER_TECH,
};

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    /// Always non-empty
    pub reply: String,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConvState, reply: impl Into<String>) -> Self {
        Self {
            new_state: state,
            reply: reply.into(),
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Pure transition function
pub fn transition(state: &ConvState, event: Event) -> TransitionResult {
    match (state.stage, event) {
        (_, Event::Reset) => {
            TransitionResult::new(ConvState::default(), messages::GREETING)
                .with_effect(Effect::ConversationReset)
        }

        (Stage::Greeting, Event::UserInput { text }) => handle_greeting(state, &text),

        (Stage::CollectingInfo, Event::UserInput { text }) => handle_collecting_info(state, &text),

        // The input that follows the tech stack only triggers question generation
        (Stage::GeneratingQuestions, Event::UserInput { .. }) => handle_generating_questions(state),

        // Answers are counted, never stored or scored
        (Stage::TechnicalInterview { cursor }, Event::UserInput { .. }) => {
            handle_answer(state, cursor)
        }

        (Stage::Completion, Event::UserInput { .. }) => {
            TransitionResult::new(state.clone(), messages::COMPLETION_ACK)
        }
    }
}

fn handle_greeting(state: &ConvState, text: &str) -> TransitionResult {
    let mut next = state.clone();
    if let Err(error) = next.record.record(Field::FullName, text) {
        return TransitionResult::new(state.clone(), error.to_string()).with_effect(
            Effect::FieldRejected {
                field: Field::FullName,
                error,
            },
        );
    }

    let reply = messages::name_collected(next.record.full_name().unwrap_or_default());
    next.stage = Stage::CollectingInfo;
    TransitionResult::new(next, reply).with_effects([
        Effect::FieldRecorded {
            field: Field::FullName,
        },
        Effect::stage_changed(Stage::Greeting, Stage::CollectingInfo),
    ])
}

fn handle_collecting_info(state: &ConvState, text: &str) -> TransitionResult {
    // Already-set fields are never asked for again
    let Some(field) = state.record.next_unset_field() else {
        return unhandled(state);
    };

    let mut next = state.clone();
    if let Err(error) = next.record.record(field, text) {
        return TransitionResult::new(state.clone(), error.to_string())
            .with_effect(Effect::FieldRejected { field, error });
    }

    let reply = match field {
        Field::FullName => return unhandled(state),
        Field::Email => messages::PHONE_PROMPT,
        Field::Phone => messages::EXPERIENCE_PROMPT,
        Field::Experience => messages::POSITION_PROMPT,
        Field::Position => messages::LOCATION_PROMPT,
        Field::Location => messages::TECH_STACK_PROMPT,
        Field::TechStack => messages::GENERATING_QUESTIONS,
    };

    let mut result = TransitionResult::new(next, reply).with_effect(Effect::FieldRecorded { field });
    if field == Field::TechStack {
        result.new_state.stage = Stage::GeneratingQuestions;
        result = result.with_effect(Effect::stage_changed(
            Stage::CollectingInfo,
            Stage::GeneratingQuestions,
        ));
    }
    result
}

fn handle_generating_questions(state: &ConvState) -> TransitionResult {
    let mut effects = Vec::new();
    let questions = match &state.questions {
        Some(questions) => questions.clone(),
        None => {
            let questions = generate_questions(state.record.tech_stack().unwrap_or_default());
            if !questions.is_empty() {
                effects.push(Effect::QuestionsGenerated {
                    technologies: questions
                        .technologies()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                });
            }
            questions
        }
    };

    let Some((tech, _, question)) = questions.question_at(0) else {
        return TransitionResult::new(state.clone(), messages::PLEASE_WAIT);
    };
    let reply = messages::first_question(tech, question);

    let stage = Stage::TechnicalInterview { cursor: 0 };
    effects.push(Effect::stage_changed(state.stage, stage));

    let next = ConvState {
        stage,
        record: state.record.clone(),
        questions: Some(questions),
    };
    TransitionResult::new(next, reply).with_effects(effects)
}

fn handle_answer(state: &ConvState, cursor: usize) -> TransitionResult {
    let Some(questions) = &state.questions else {
        return unhandled(state);
    };
    let technologies = questions.technologies();
    let previous_tech = current_tech_and_question(cursor, &technologies, QUESTIONS_PER_TECH)
        .map(|(tech, _)| tech);

    let answered = cursor + 1;
    let counted = Effect::AnswerCounted {
        answered,
        total: questions.total_questions(),
    };

    if is_interview_complete(answered, &technologies, QUESTIONS_PER_TECH) {
        let mut next = state.clone();
        next.stage = Stage::Completion;
        return TransitionResult::new(next, state.record.completion_summary())
            .with_effects([counted, Effect::stage_changed(state.stage, Stage::Completion)]);
    }

    let Some((tech, index)) = current_tech_and_question(answered, &technologies, QUESTIONS_PER_TECH)
    else {
        return unhandled(state);
    };
    let Some(question) = questions.get(tech).map(|asked| asked[index].as_str()) else {
        return unhandled(state);
    };
    let reply = if index == 0 && previous_tech != Some(tech) {
        messages::next_tech(tech, question)
    } else {
        messages::next_question(tech, question)
    };

    let mut next = state.clone();
    next.stage = Stage::TechnicalInterview { cursor: answered };
    TransitionResult::new(next, reply).with_effect(counted)
}

fn unhandled(state: &ConvState) -> TransitionResult {
    TransitionResult::new(state.clone(), messages::UNKNOWN_RESPONSE)
        .with_effect(Effect::Unhandled { stage: state.stage })
}
