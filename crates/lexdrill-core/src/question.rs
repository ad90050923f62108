//! Question and assessment types.
//!
//! A [`Question`] is one of four shapes (matching, multiple-choice,
//! fill-in-the-blank, written); an [`AssessmentSet`] is a bounded, ordered
//! collection of them produced by the composer in [`crate::generate`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on the number of questions in one assessment.
pub const MAX_QUESTIONS: usize = 25;

/// Target question count for an assessment over `term_count` terms:
/// `min(floor(term_count * 1.2) + 3, 25)`.
pub fn target_question_count(term_count: usize) -> usize {
    (term_count * 6 / 5 + 3).min(MAX_QUESTIONS)
}

/// A draggable item in a matching question: a term's surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchItem {
    pub id: Uuid,
    pub text: String,
}

/// A drop target in a matching question: a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTarget {
    pub id: Uuid,
    pub text: String,
}

/// The four question shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Connect each item to its matching target. `correct_pairs` maps item id
    /// to target id; items and targets are stored in the same relative order,
    /// so the map is positional. Display-order shuffling of targets is the
    /// presentation layer's job.
    Match {
        items: Vec<MatchItem>,
        targets: Vec<MatchTarget>,
        correct_pairs: HashMap<Uuid, Uuid>,
    },
    /// Pick the one correct answer among the options.
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        correct_answer: String,
    },
    /// Fill the blank marker in the sentence with the expected word.
    FillBlank {
        sentence: String,
        correct_answer: String,
    },
    /// Open prompt with a model answer for self-comparison.
    Written {
        prompt: String,
        model_answer: String,
    },
}

/// One question in an assessment, tagged with its originating term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within an assessment set.
    pub id: Uuid,
    /// The term this question practices; misses are tracked against it.
    pub term: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(term: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            term: term.into(),
            kind,
        }
    }
}

/// A user's submission for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Item-id to target-id pairing for a matching question.
    Pairs(HashMap<Uuid, Uuid>),
    /// Free text: the chosen option, the typed fill, or the written sentence.
    Text(String),
}

/// A generated, bounded collection of practice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSet {
    pub title: String,
    pub questions: Vec<Question>,
}

impl AssessmentSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
