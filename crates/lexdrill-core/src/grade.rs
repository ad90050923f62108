//! Per-question grading.
//!
//! Grading is pure: it never mutates question data and never fails. Missing
//! answers and answer shapes that do not match the question kind are simply
//! incorrect.

use std::collections::HashMap;

use uuid::Uuid;

use crate::question::{Answer, AssessmentSet, Question, QuestionKind};

/// Grade one question against an optional submission.
pub fn grade(question: &Question, answer: Option<&Answer>) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    match (&question.kind, answer) {
        (QuestionKind::Match { correct_pairs, .. }, Answer::Pairs(submitted)) => {
            submitted.len() == correct_pairs.len()
                && correct_pairs
                    .iter()
                    .all(|(item, target)| submitted.get(item) == Some(target))
        }
        (QuestionKind::MultipleChoice { correct_answer, .. }, Answer::Text(text)) => {
            text == correct_answer
        }
        (QuestionKind::FillBlank { correct_answer, .. }, Answer::Text(text)) => {
            text.trim().to_lowercase() == correct_answer.trim().to_lowercase()
        }
        (QuestionKind::Written { .. }, Answer::Text(text)) => !text.trim().is_empty(),
        // Answer shape does not fit the question kind.
        _ => false,
    }
}

/// Outcome of grading a full answer map against an assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSummary {
    /// Question count in the assessment.
    pub total: usize,
    /// Questions graded correct.
    pub correct: usize,
    /// Terms with at least one incorrect answer, deduplicated, in question
    /// order.
    pub wrong_terms: Vec<String>,
}

impl GradeSummary {
    /// Final score: total questions minus distinct missed terms.
    pub fn score(&self) -> usize {
        self.total.saturating_sub(self.wrong_terms.len())
    }
}

/// Grade every question in the set against the submitted answer map.
pub fn grade_all(set: &AssessmentSet, answers: &HashMap<Uuid, Answer>) -> GradeSummary {
    let mut correct = 0;
    let mut wrong_terms: Vec<String> = Vec::new();
    for question in &set.questions {
        if grade(question, answers.get(&question.id)) {
            correct += 1;
        } else if !wrong_terms.contains(&question.term) {
            wrong_terms.push(question.term.clone());
        }
    }
    GradeSummary {
        total: set.len(),
        correct,
        wrong_terms,
    }
}
