//! Question generators and the assessment composer.
//!
//! Generators are pure: given terms they either produce a question or return
//! `None` when their precondition is unmet, never an error. The composer
//! assembles a bounded, shuffled [`AssessmentSet`] out of them.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::error::GenerateError;
use crate::model::Term;
use crate::question::{
    target_question_count, AssessmentSet, MatchItem, MatchTarget, Question, QuestionKind,
};
use crate::shuffle::shuffled;

/// Marker substituted for the term inside fill-in-the-blank sentences.
pub const BLANK_MARKER: &str = "_____";

/// Term/definition pairs per matching question.
const MATCH_SIZE: usize = 4;

/// Distractors per multiple-choice question.
const DISTRACTOR_COUNT: usize = 3;

/// Build one matching question from the first four defined terms of an
/// already-shuffled list. Items and targets keep the same relative order, so
/// `correct_pairs` is positional; the miss is tracked against the first
/// selected term.
pub fn match_question(terms: &[Term]) -> Option<Question> {
    let selected: Vec<&Term> = terms
        .iter()
        .filter(|t| t.primary_definition().is_some())
        .take(MATCH_SIZE)
        .collect();
    if selected.len() < MATCH_SIZE {
        return None;
    }

    let items: Vec<MatchItem> = selected
        .iter()
        .map(|t| MatchItem {
            id: Uuid::new_v4(),
            text: t.text.clone(),
        })
        .collect();
    let targets: Vec<MatchTarget> = selected
        .iter()
        .map(|t| MatchTarget {
            id: Uuid::new_v4(),
            // take(MATCH_SIZE) above only kept defined terms
            text: t.primary_definition().unwrap_or_default().to_string(),
        })
        .collect();
    let correct_pairs: HashMap<Uuid, Uuid> = items
        .iter()
        .zip(&targets)
        .map(|(item, target)| (item.id, target.id))
        .collect();

    Some(Question::new(
        selected[0].text.clone(),
        QuestionKind::Match {
            items,
            targets,
            correct_pairs,
        },
    ))
}

/// Build a "which word fits this definition" question for `term`, drawing
/// three distinct distractor texts uniformly at random from the rest of the
/// pool. Skipped when the term has no definition or the pool is too small.
pub fn multiple_choice(term: &Term, pool: &[Term]) -> Option<Question> {
    let definition = term.primary_definition()?;

    let mut seen = HashSet::new();
    let candidates: Vec<String> = pool
        .iter()
        .filter(|t| !t.text.eq_ignore_ascii_case(&term.text))
        .map(|t| t.text.clone())
        .filter(|text| seen.insert(text.to_lowercase()))
        .collect();

    let mut distractors = shuffled(&candidates);
    distractors.truncate(DISTRACTOR_COUNT);
    if distractors.len() < DISTRACTOR_COUNT {
        return None;
    }

    let mut options = distractors;
    options.push(term.text.clone());
    let options = shuffled(&options);

    Some(Question::new(
        term.text.clone(),
        QuestionKind::MultipleChoice {
            prompt: format!("Which word means: '{definition}'?"),
            options,
            correct_answer: term.text.clone(),
        },
    ))
}

/// Build a fill-in-the-blank question from the term's first stored example.
/// The example has markdown emphasis stripped, then every case-insensitive
/// occurrence of the term is replaced with [`BLANK_MARKER`]. An example that
/// never names the term yields no blank to fill, so it is skipped.
pub fn fill_blank(term: &Term) -> Option<Question> {
    let example = term.first_example()?;
    let stripped = strip_emphasis(example);
    let sentence = blank_out(&stripped, &term.text);
    if !sentence.contains(BLANK_MARKER) {
        return None;
    }

    Some(Question::new(
        term.text.clone(),
        QuestionKind::FillBlank {
            sentence,
            correct_answer: term.text.clone(),
        },
    ))
}

/// Build an open writing prompt. Always produces a question; the model answer
/// is the first stored example, or a templated sentence when none exists.
pub fn written(term: &Term) -> Question {
    let model_answer = match term.first_example() {
        Some(example) => strip_emphasis(example),
        None => format!("I practiced the word '{}' today.", term.text),
    };

    Question::new(
        term.text.clone(),
        QuestionKind::Written {
            prompt: format!("Write a sentence of your own using '{}'.", term.text),
            model_answer,
        },
    )
}

/// Compose one assessment over the given terms.
///
/// The input list is shuffled once and that order feeds every generator, so
/// term selection is consistent across question types within a run. The
/// collected questions are shuffled and truncated to the target count. Zero
/// questions is a hard failure: the caller must not start a session on it.
pub fn generate_assessment(terms: &[Term]) -> Result<AssessmentSet, GenerateError> {
    let pool = shuffled(terms);

    let mut questions = Vec::new();
    if let Some(q) = match_question(&pool) {
        questions.push(q);
    }
    for term in &pool {
        if let Some(q) = multiple_choice(term, &pool) {
            questions.push(q);
        }
        if let Some(q) = fill_blank(term) {
            questions.push(q);
        }
        questions.push(written(term));
    }

    if questions.is_empty() {
        return Err(GenerateError::NoQuestions {
            term_count: terms.len(),
        });
    }

    let mut questions = shuffled(&questions);
    let target = target_question_count(terms.len());
    questions.truncate(target);
    debug!(
        terms = terms.len(),
        questions = questions.len(),
        target,
        "composed assessment"
    );

    Ok(AssessmentSet {
        title: format!("Practice Assessment ({} questions)", questions.len()),
        questions,
    })
}

/// Remove markdown emphasis markers from AI-written example sentences.
fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .replace('_', "")
}

/// Replace every case-insensitive occurrence of `term` with the blank marker.
fn blank_out(sentence: &str, term: &str) -> String {
    if term.is_empty() {
        return sentence.to_string();
    }
    let mut out = String::with_capacity(sentence.len());
    let mut rest = sentence;
    while let Some(ch) = rest.chars().next() {
        if let Some(len) = ci_prefix_len(rest, term) {
            out.push_str(BLANK_MARKER);
            rest = &rest[len..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Byte length of a case-insensitive occurrence of `term` at the start of
/// `text`, if one is there.
fn ci_prefix_len(text: &str, term: &str) -> Option<usize> {
    let mut term_chars = term.chars();
    let mut len = 0;
    for ch in text.chars() {
        match term_chars.next() {
            Some(tc) => {
                if !ch.to_lowercase().eq(tc.to_lowercase()) {
                    return None;
                }
                len += ch.len_utf8();
            }
            None => break,
        }
    }
    if term_chars.next().is_none() {
        Some(len)
    } else {
        None
    }
}
