//! Field validation and parsing for candidate details
//!
//! Pure functions only. The state machine decides what to store; these decide
//! whether the text the candidate typed is acceptable.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_EXPERIENCE: f64 = 0.0;
pub const MAX_EXPERIENCE: f64 = 50.0;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

// ASCII digits only; at most 16 digits with the leading one.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern compiles"));

/// A rejected field value. The display text is what the candidate sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please tell me your full name so we can get started.")]
    EmptyName,
    #[error("Please provide a valid email address (e.g., john.doe@example.com).")]
    InvalidEmail,
    #[error("Please provide a valid phone number.")]
    InvalidPhone,
    #[error("Please provide a number for years of experience.")]
    ExperienceNotANumber,
    #[error("Please provide a realistic number of years of experience (0-50).")]
    ExperienceOutOfRange,
    #[error("Please provide at least one technology in your tech stack.")]
    EmptyTechStack,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Spaces, hyphens and parentheses are formatting and are ignored.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_PATTERN.is_match(&cleaned)
}

/// A number of years within `MIN_EXPERIENCE..=MAX_EXPERIENCE`.
pub fn validate_experience(experience: &str) -> bool {
    // NaN fails both comparisons
    experience
        .trim()
        .parse::<f64>()
        .is_ok_and(|years| (MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&years))
}

/// Parse years of experience, telling non-numeric input apart from
/// numbers outside the accepted range.
pub fn parse_experience(experience: &str) -> Result<f64, FieldError> {
    let years: f64 = experience
        .trim()
        .parse()
        .map_err(|_| FieldError::ExperienceNotANumber)?;

    if validate_experience(experience) {
        Ok(years)
    } else {
        Err(FieldError::ExperienceOutOfRange)
    }
}

/// Split a comma-separated technology list. Order and duplicates are kept;
/// blank entries are dropped.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(String::from)
        .collect()
}
