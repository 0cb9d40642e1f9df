//! Technical interview questions and interview cursor arithmetic
//!
//! Questions are fixed templates keyed by technology name. The interview
//! walks them with a single cursor: `cursor / QUESTIONS_PER_TECH` picks the
//! technology and `cursor % QUESTIONS_PER_TECH` the question within it.

use serde::{Deserialize, Serialize};

pub const QUESTIONS_PER_TECH: usize = 5;

/// The five questions asked about one technology, in asking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechQuestions {
    pub tech: String,
    pub questions: [String; QUESTIONS_PER_TECH],
}

impl TechQuestions {
    fn for_tech(tech: &str) -> Self {
        Self {
            tech: tech.to_string(),
            questions: [
                format!("What are the key features of {tech}?"),
                format!("Describe a real-world scenario where you would use {tech}."),
                format!("What are the best practices when working with {tech}?"),
                format!("How would you troubleshoot common issues in {tech}?"),
                format!("What are the latest trends and updates in {tech}?"),
            ],
        }
    }
}

/// Questions for every declared technology.
///
/// Keyed by technology name in first-declared order. A name declared twice
/// has one entry; the later declaration overwrites the earlier one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    entries: Vec<TechQuestions>,
}

impl QuestionSet {
    pub fn get(&self, tech: &str) -> Option<&[String; QUESTIONS_PER_TECH]> {
        self.entries
            .iter()
            .find(|entry| entry.tech == tech)
            .map(|entry| &entry.questions)
    }

    /// Technologies in interview order.
    pub fn technologies(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.tech.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_questions(&self) -> usize {
        self.entries.len() * QUESTIONS_PER_TECH
    }

    /// The question the cursor points at, with its technology.
    pub fn question_at(&self, cursor: usize) -> Option<(&str, usize, &str)> {
        let entry = self.entries.get(cursor / QUESTIONS_PER_TECH)?;
        let index = cursor % QUESTIONS_PER_TECH;
        Some((entry.tech.as_str(), index, entry.questions[index].as_str()))
    }

    fn insert(&mut self, questions: TechQuestions) {
        match self.entries.iter_mut().find(|entry| entry.tech == questions.tech) {
            Some(existing) => *existing = questions,
            None => self.entries.push(questions),
        }
    }
}

/// Build the question set for a tech stack. Deterministic: the same stack
/// always yields the same questions.
pub fn generate_questions<S: AsRef<str>>(tech_stack: &[S]) -> QuestionSet {
    let mut set = QuestionSet::default();
    for tech in tech_stack {
        set.insert(TechQuestions::for_tech(tech.as_ref()));
    }
    set
}

/// Map a cursor to `(technology, index within technology)`.
///
/// Returns `None` once the cursor has run past the last technology.
pub fn current_tech_and_question<S: AsRef<str>>(
    cursor: usize,
    tech_list: &[S],
    per_tech: usize,
) -> Option<(&str, usize)> {
    if per_tech == 0 {
        return None;
    }
    tech_list
        .get(cursor / per_tech)
        .map(|tech| (tech.as_ref(), cursor % per_tech))
}

pub fn is_interview_complete<S>(cursor: usize, tech_list: &[S], per_tech: usize) -> bool {
    cursor >= tech_list.len() * per_tech
}

/// Fraction of the interview answered, clamped to `[0, 1]`.
#[allow(clippy::cast_precision_loss)] // question counts are tiny
pub fn calculate_progress(answered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (answered as f64 / total as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_questions_single_tech() {
        let set = generate_questions(&["Python"]);
        assert_eq!(set.technologies(), vec!["Python"]);

        let questions = set.get("Python").unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.contains("Python")));
        assert_eq!(questions[0], "What are the key features of Python?");
        assert_eq!(questions[4], "What are the latest trends and updates in Python?");
    }

    #[test]
    fn test_generate_questions_preserves_order() {
        let set = generate_questions(&["Rust", "Go", "React"]);
        assert_eq!(set.technologies(), vec!["Rust", "Go", "React"]);
        assert_eq!(set.total_questions(), 15);
        assert!(set.get("Kotlin").is_none());
    }

    #[test]
    fn test_generate_questions_collapses_duplicates() {
        let set = generate_questions(&["Go", "Rust", "Go"]);
        assert_eq!(set.technologies(), vec!["Go", "Rust"]);
        assert_eq!(set.technologies().len(), 2);
        assert_eq!(set, generate_questions(&["Go", "Rust"]));
    }

    #[test]
    fn test_generate_questions_empty() {
        let set = generate_questions::<&str>(&[]);
        assert!(set.is_empty());
        assert_eq!(set.total_questions(), 0);
        assert!(set.question_at(0).is_none());
    }

    #[test]
    fn test_question_at() {
        let set = generate_questions(&["Python", "React"]);
        let (tech, index, question) = set.question_at(7).unwrap();
        assert_eq!(tech, "React");
        assert_eq!(index, 2);
        assert_eq!(question, "What are the best practices when working with React?");
        assert!(set.question_at(10).is_none());
    }

    #[test]
    fn test_current_tech_and_question() {
        let techs = ["Python", "React"];
        assert_eq!(current_tech_and_question(0, &techs, QUESTIONS_PER_TECH), Some(("Python", 0)));
        assert_eq!(current_tech_and_question(7, &techs, QUESTIONS_PER_TECH), Some(("React", 2)));
        assert_eq!(current_tech_and_question(10, &techs, QUESTIONS_PER_TECH), None);
        assert_eq!(current_tech_and_question(0, &techs, 0), None);
    }

    #[test]
    fn test_is_interview_complete() {
        let techs = ["Python", "React"];
        assert!(is_interview_complete(10, &techs, QUESTIONS_PER_TECH));
        assert!(is_interview_complete(11, &techs, QUESTIONS_PER_TECH));
        assert!(!is_interview_complete(9, &techs, QUESTIONS_PER_TECH));
        assert!(is_interview_complete::<&str>(0, &[], QUESTIONS_PER_TECH));
    }

    #[test]
    fn test_calculate_progress() {
        assert!(calculate_progress(0, 0).abs() < f64::EPSILON);
        assert!((calculate_progress(5, 10) - 0.5).abs() < f64::EPSILON);
        assert!((calculate_progress(12, 10) - 1.0).abs() < f64::EPSILON);
    }
}
