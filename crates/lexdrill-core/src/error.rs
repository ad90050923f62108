//! Typed errors for the practice engine.

use thiserror::Error;

/// Errors from assessment composition.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No generator produced a question from the supplied terms. The caller
    /// must not start a session on an empty assessment.
    #[error("no questions could be generated from {term_count} term(s)")]
    NoQuestions { term_count: usize },
}

/// Errors from driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An answer was submitted after the session reached its results state.
    #[error("the session is already finished")]
    Finished,

    /// Redeem was invoked without any missed terms to replay.
    #[error("redeem requires a finished session with at least one missed term")]
    NothingToRedeem,

    /// Composing the redeem assessment failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
