//! Fixed reply templates for the hiring assistant
//!
//! Every reply the state machine emits is built from these. Nothing here is
//! generated; templates only take the candidate's own values.

pub const GREETING: &str = "Hello! I'm the TalentScout AI Hiring Assistant. I'm here to help us get to know you better and assess your technical skills.

This conversation will take about 10-15 minutes and includes:
• Basic information collection
• Technical skill assessment
• Custom interview questions based on your tech stack

Let's start by getting some basic information about you. What's your full name?";

pub const PHONE_PROMPT: &str = "Great! Now, what's your phone number?";
pub const EXPERIENCE_PROMPT: &str =
    "Perfect! How many years of experience do you have in software development?";
pub const POSITION_PROMPT: &str = "Excellent! What position(s) are you interested in?";
pub const LOCATION_PROMPT: &str = "Great! What's your current location (city, country)?";
pub const TECH_STACK_PROMPT: &str = "Perfect! Now, please list your tech stack (e.g., Python, Django, React, etc.). You can separate technologies with commas.";
pub const GENERATING_QUESTIONS: &str = "Excellent! I'm generating custom technical questions based on your tech stack. This will take a moment...";
pub const PLEASE_WAIT: &str = "Please wait while I generate your custom questions...";
pub const COMPLETION_ACK: &str = "The interview is complete! Thank you for your time. Our team will review your responses and contact you soon.";
pub const UNKNOWN_RESPONSE: &str =
    "I'm not sure how to respond to that. Could you please rephrase?";

/// Placeholder for profile fields that were never collected.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn name_collected(name: &str) -> String {
    format!("Nice to meet you, {name}! Now, could you please provide your email address?")
}

pub fn first_question(tech: &str, question: &str) -> String {
    format!("Perfect! Let's start with {tech}. Here's your first question:\n\n{question}")
}

pub fn next_question(tech: &str, question: &str) -> String {
    format!("Great answer! Here's your next question about {tech}:\n\n{question}")
}

pub fn next_tech(tech: &str, question: &str) -> String {
    format!("Excellent! Now let's move to {tech}. Here's your first question:\n\n{question}")
}

/// Years of experience as shown to the candidate: whole numbers keep a
/// trailing `.0` (`5.0`, `4.5`).
pub fn format_years(years: f64) -> String {
    // Debug output is the shortest round-trip form and always has a decimal point
    format!("{years:?}")
}

/// Closing message sent with the last answer.
pub fn interview_complete(name: &str, experience: &str, tech_stack: &str, location: &str) -> String {
    format!(
        "Thank you for your response! That concludes our technical interview. You've done great!\n\n\
         Summary of your profile:\n\
         • Name: {name}\n\
         • Experience: {experience} years\n\
         • Tech Stack: {tech_stack}\n\
         • Location: {location}\n\n\
         Our team will review your responses and get back to you within 2-3 business days. \
         Thank you for your time and interest in joining our team!"
    )
}
