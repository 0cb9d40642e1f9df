//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::state::*;
use super::transition::*;
use super::*;
use crate::messages;
use crate::questions::QUESTIONS_PER_TECH;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z .'-]{0,30}"
}

fn arb_valid_email() -> impl Strategy<Value = String> {
    ("[a-z0-9._%+-]{1,12}", "[a-z0-9-]{1,10}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn arb_valid_phone() -> impl Strategy<Value = String> {
    (any::<bool>(), "[1-9][0-9]{5,12}").prop_map(|(plus, digits)| {
        if plus {
            format!("+{digits}")
        } else {
            digits
        }
    })
}

fn arb_tech_stack() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Z][a-z]{1,8}", 1..4)
}

fn arb_free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.@+()-]{0,40}"
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        9 => arb_free_text().prop_map(Event::user_input),
        1 => Just(Event::Reset),
    ]
}

/// Inputs that take a fresh conversation through every collection step
fn arb_profile_inputs() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    (
        arb_name(),
        arb_valid_email(),
        arb_valid_phone(),
        0u8..=50,
        arb_tech_stack(),
    )
        .prop_map(|(name, email, phone, years, stack)| {
            let inputs = vec![
                name,
                email,
                phone,
                years.to_string(),
                "Engineer".to_string(),
                "Remote".to_string(),
                stack.join(", "),
            ];
            (inputs, stack)
        })
}

// ============================================================================
// State Validity Checkers
// ============================================================================

/// Fields are only ever set in collection order
fn record_is_prefix_ordered(record: &CandidateRecord) -> bool {
    let order = std::iter::once(Field::FullName).chain(Field::COLLECTION_ORDER);
    let set: Vec<bool> = order.map(|field| record.is_set(field)).collect();
    set.windows(2).all(|pair| pair[0] || !pair[1])
}

fn is_valid_state(state: &ConvState) -> bool {
    if !record_is_prefix_ordered(state.record()) {
        return false;
    }
    match state.stage() {
        Stage::Greeting => *state.record() == CandidateRecord::default(),
        Stage::CollectingInfo => {
            state.record().full_name().is_some() && state.record().tech_stack().is_none()
        }
        Stage::GeneratingQuestions => state.record().tech_stack().is_some(),
        Stage::TechnicalInterview { cursor } => state
            .questions()
            .is_some_and(|questions| cursor < questions.total_questions()),
        Stage::Completion => state.questions().is_some(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: Valid state and non-empty reply after any transition
    #[test]
    fn prop_transitions_preserve_validity(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut state = ConvState::default();

        for event in events {
            let result = transition(&state, event);
            prop_assert!(!result.reply.is_empty());
            state = result.new_state;
            prop_assert!(is_valid_state(&state), "Invalid state: {:?}", state);
        }
    }

    // Invariant 2: A set field never changes until reset
    #[test]
    fn prop_fields_written_once(events in proptest::collection::vec(arb_free_text(), 0..40)) {
        let mut state = ConvState::default();

        for text in events {
            let before = state.record().profile();
            state = transition(&state, Event::user_input(text)).new_state;
            let after = state.record().profile();
            prop_assert!(after.len() >= before.len());
            prop_assert_eq!(&after[..before.len()], &before[..]);
        }
    }

    // Invariant 3: Any non-empty greeting becomes the trimmed name
    #[test]
    fn prop_greeting_sets_trimmed_name(name in arb_name(), pad in " {0,3}") {
        let input = format!("{pad}{name}{pad}");
        let result = transition(&ConvState::default(), Event::user_input(input));
        prop_assert_eq!(result.new_state.stage(), Stage::CollectingInfo);
        prop_assert_eq!(result.new_state.record().full_name(), Some(name.trim()));
        prop_assert!(result.reply.contains(name.trim()));
    }

    // Invariant 3b: Whitespace-only greetings still advance, with an empty name
    #[test]
    fn prop_whitespace_greeting_advances(input in "[ \t]{1,6}") {
        let result = transition(&ConvState::default(), Event::user_input(input));
        prop_assert_eq!(result.new_state.stage(), Stage::CollectingInfo);
        prop_assert_eq!(result.new_state.record().full_name(), Some(""));
        prop_assert!(!result.reply.is_empty());
    }

    // Invariant 4: Reset always returns the initial state
    #[test]
    fn prop_reset_is_total(events in proptest::collection::vec(arb_event(), 0..30)) {
        let mut state = ConvState::default();
        for event in events {
            state = transition(&state, event).new_state;
        }

        let result = transition(&state, Event::Reset);
        prop_assert_eq!(result.new_state, ConvState::default());
        prop_assert_eq!(result.reply, messages::GREETING);
    }

    // Invariant 5: A full interview asks exactly five questions per distinct technology
    #[test]
    fn prop_interview_length((inputs, stack) in arb_profile_inputs()) {
        let mut state = ConvState::default();
        for input in &inputs {
            state = transition(&state, Event::user_input(input.clone())).new_state;
        }
        prop_assert_eq!(state.stage(), Stage::GeneratingQuestions);

        state = transition(&state, Event::user_input("start")).new_state;
        let mut distinct = stack.clone();
        distinct.sort();
        distinct.dedup();
        let total = distinct.len() * QUESTIONS_PER_TECH;

        for answered in 1..=total {
            prop_assert!(!state.stage().is_terminal());
            let result = transition(&state, Event::user_input("answer"));
            state = result.new_state;
            if answered < total {
                prop_assert_eq!(state.stage(), Stage::TechnicalInterview { cursor: answered });
            } else {
                prop_assert!(result.reply.contains(&stack.join(", ")));
            }
        }
        prop_assert_eq!(state.stage(), Stage::Completion);
        prop_assert!((state.progress() - 1.0).abs() < f64::EPSILON);
    }

    // Invariant 6: Completion is terminal
    #[test]
    fn prop_completion_is_terminal(
        (inputs, _stack) in arb_profile_inputs(),
        extra in proptest::collection::vec(arb_free_text(), 1..5)
    ) {
        let mut state = ConvState::default();
        for input in inputs {
            state = transition(&state, Event::user_input(input)).new_state;
        }
        while !state.stage().is_terminal() {
            state = transition(&state, Event::user_input("answer")).new_state;
        }

        for text in extra {
            let result = transition(&state, Event::user_input(text));
            prop_assert_eq!(&result.new_state, &state);
            prop_assert_eq!(result.reply, messages::COMPLETION_ACK);
        }
    }
}
