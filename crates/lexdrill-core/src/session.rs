//! Session state machine: drives a user through one assessment run.
//!
//! A [`Session`] moves from `Playing` to `Results` as answers come in, tracks
//! missed terms, and can spawn a fresh replay session over exactly those
//! terms ("redeem"). Completion is reported through the [`SessionObserver`]
//! port; dropping a session mid-run discards it without a callback.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::SessionError;
use crate::generate::generate_assessment;
use crate::grade::grade;
use crate::model::Term;
use crate::question::{Answer, AssessmentSet, Question};

/// What kind of practice run a session is, for history labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Assessment,
    Quiz,
    Flashcards,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Assessment => write!(f, "assessment"),
            ActivityType::Quiz => write!(f, "quiz"),
            ActivityType::Flashcards => write!(f, "flashcards"),
        }
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assessment" => Ok(ActivityType::Assessment),
            "quiz" => Ok(ActivityType::Quiz),
            "flashcards" => Ok(ActivityType::Flashcards),
            other => Err(format!("unknown activity type: {other}")),
        }
    }
}

/// Completion callback port. The host persists practice history through this
/// rather than the engine holding any global state.
pub trait SessionObserver {
    /// Invoked exactly once, when a session reaches its results state.
    fn on_complete(&self, activity: ActivityType, score: usize, total: usize);
}

/// Observer that ignores completion events.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_complete(&self, _: ActivityType, _: usize, _: usize) {}
}

/// Where a session is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Results,
}

/// Transient state of one run through an assessment.
pub struct Session {
    activity: ActivityType,
    set: AssessmentSet,
    terms: Vec<Term>,
    current: usize,
    answers: HashMap<Uuid, Answer>,
    wrong_terms: Vec<String>,
    score: usize,
    state: SessionState,
}

impl Session {
    /// Generate an assessment over `terms` and enter the playing state.
    pub fn start(terms: &[Term], activity: ActivityType) -> Result<Self, SessionError> {
        let set = generate_assessment(terms)?;
        info!(%activity, questions = set.len(), "starting session");
        Ok(Self {
            activity,
            set,
            terms: terms.to_vec(),
            current: 0,
            answers: HashMap::new(),
            wrong_terms: Vec::new(),
            score: 0,
            state: SessionState::Playing,
        })
    }

    pub fn activity(&self) -> ActivityType {
        self.activity
    }

    pub fn set(&self) -> &AssessmentSet {
        &self.set
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.set.len()
    }

    /// The question awaiting an answer; `None` once results are reached.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::Playing => self.set.questions.get(self.current),
            SessionState::Results => None,
        }
    }

    /// Submit the answer for the current question and advance. Returns the
    /// correctness verdict. Submitting the final answer computes the score,
    /// fires the observer's completion callback, and enters the results
    /// state.
    pub fn submit(
        &mut self,
        answer: Answer,
        observer: &dyn SessionObserver,
    ) -> Result<bool, SessionError> {
        let (question_id, term, correct) = {
            let Some(question) = self.current_question() else {
                return Err(SessionError::Finished);
            };
            (
                question.id,
                question.term.clone(),
                grade(question, Some(&answer)),
            )
        };

        if !correct && !self.wrong_terms.contains(&term) {
            self.wrong_terms.push(term.clone());
        }
        debug!(index = self.current, %term, correct, "answer submitted");

        self.answers.insert(question_id, answer);
        self.current += 1;
        if self.current >= self.set.len() {
            self.finish(observer);
        }
        Ok(correct)
    }

    fn finish(&mut self, observer: &dyn SessionObserver) {
        self.score = self.set.len().saturating_sub(self.wrong_terms.len());
        self.state = SessionState::Results;
        info!(
            activity = %self.activity,
            score = self.score,
            total = self.set.len(),
            missed = self.wrong_terms.len(),
            "session complete"
        );
        observer.on_complete(self.activity, self.score, self.set.len());
    }

    /// Final score: total questions minus distinct missed terms. Meaningful
    /// once the session reaches results.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn percentage(&self) -> f64 {
        if self.set.is_empty() {
            return 0.0;
        }
        self.score as f64 / self.set.len() as f64 * 100.0
    }

    /// Terms missed at least once, in the order they were first missed.
    pub fn wrong_terms(&self) -> &[String] {
        &self.wrong_terms
    }

    /// Submitted answers keyed by question id.
    pub fn answers(&self) -> &HashMap<Uuid, Answer> {
        &self.answers
    }

    /// Build a fresh playing session over exactly the missed terms. Disabled
    /// until results are reached, and when nothing was missed.
    pub fn redeem(&self) -> Result<Session, SessionError> {
        if self.state != SessionState::Results || self.wrong_terms.is_empty() {
            return Err(SessionError::NothingToRedeem);
        }
        let missed: Vec<Term> = self
            .terms
            .iter()
            .filter(|t| self.wrong_terms.iter().any(|w| w == &t.text))
            .cloned()
            .collect();
        info!(terms = missed.len(), "redeeming missed terms");
        Session::start(&missed, self.activity)
    }
}
