//! Core data model types for lexdrill.
//!
//! These are the fundamental types the entire system uses to represent
//! vocabulary terms under study and the library that owns them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a term sits in the study lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyStatus {
    Learning,
    Mastered,
}

impl fmt::Display for StudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyStatus::Learning => write!(f, "learning"),
            StudyStatus::Mastered => write!(f, "mastered"),
        }
    }
}

impl FromStr for StudyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learning" => Ok(StudyStatus::Learning),
            "mastered" => Ok(StudyStatus::Mastered),
            other => Err(format!("unknown study status: {other}")),
        }
    }
}

/// One part-of-speech/definition pairing for a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Part of speech (e.g. "noun", "verb").
    pub part_of_speech: String,
    /// The definition text.
    pub definition: String,
}

/// Explored linguistic details for a term, beyond its bare meanings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDetails {
    /// Example sentences using the term.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Common collocations.
    #[serde(default)]
    pub collocations: Vec<String>,
    /// Synonyms.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Antonyms.
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl TermDetails {
    /// Merge another detail set into this one, keeping existing entries and
    /// appending only values not already present.
    pub fn merge(&mut self, other: &TermDetails) {
        merge_unique(&mut self.examples, &other.examples);
        merge_unique(&mut self.collocations, &other.collocations);
        merge_unique(&mut self.synonyms, &other.synonyms);
        merge_unique(&mut self.antonyms, &other.antonyms);
    }
}

fn merge_unique(into: &mut Vec<String>, from: &[String]) {
    for value in from {
        if !into.iter().any(|v| v == value) {
            into.push(value.clone());
        }
    }
}

/// A vocabulary entry under study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// The term's surface form, as displayed to the user.
    pub text: String,
    /// One or more meanings.
    pub meanings: Vec<Meaning>,
    /// Explored details, populated as the user digs into the term.
    #[serde(default)]
    pub details: Option<TermDetails>,
    /// Study status.
    #[serde(default = "default_status")]
    pub status: StudyStatus,
    /// When the term entered the library.
    pub added_at: DateTime<Utc>,
    /// Last mutation (details fetched, status changed).
    pub updated_at: DateTime<Utc>,
}

fn default_status() -> StudyStatus {
    StudyStatus::Learning
}

impl Term {
    /// Create a term with the given meanings, stamped with the current time.
    pub fn new(text: impl Into<String>, meanings: Vec<Meaning>) -> Self {
        let now = Utc::now();
        Self {
            text: text.into(),
            meanings,
            details: None,
            status: StudyStatus::Learning,
            added_at: now,
            updated_at: now,
        }
    }

    /// The first meaning's definition, if any meaning is stored.
    pub fn primary_definition(&self) -> Option<&str> {
        self.meanings.first().map(|m| m.definition.as_str())
    }

    /// The first stored example sentence, if any.
    pub fn first_example(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.examples.first())
            .map(String::as_str)
    }
}

/// The library of studied terms, keyed by lowercased term text.
///
/// Keys are unique; inserting a term whose lowercased text is already present
/// replaces the stored entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    terms: BTreeMap<String, Term>,
}

fn library_key(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, replacing any entry with the same lowercased text.
    /// Returns the replaced term, if there was one.
    pub fn insert(&mut self, term: Term) -> Option<Term> {
        self.terms.insert(library_key(&term.text), term)
    }

    pub fn get(&self, text: &str) -> Option<&Term> {
        self.terms.get(&library_key(text))
    }

    pub fn contains(&self, text: &str) -> bool {
        self.terms.contains_key(&library_key(text))
    }

    /// Remove a term by text. Returns the removed entry, if present.
    pub fn remove(&mut self, text: &str) -> Option<Term> {
        self.terms.remove(&library_key(text))
    }

    /// Change a term's study status, refreshing its update timestamp.
    /// Returns false if the term is not in the library.
    pub fn set_status(&mut self, text: &str, status: StudyStatus) -> bool {
        match self.terms.get_mut(&library_key(text)) {
            Some(term) => {
                term.status = status;
                term.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Merge newly fetched details into a term, refreshing its update
    /// timestamp. Returns false if the term is not in the library.
    pub fn merge_details(&mut self, text: &str, details: &TermDetails) -> bool {
        match self.terms.get_mut(&library_key(text)) {
            Some(term) => {
                term.details
                    .get_or_insert_with(TermDetails::default)
                    .merge(details);
                term.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Iterate all terms in key order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Terms with the given study status, in key order.
    pub fn terms_with_status(&self, status: StudyStatus) -> Vec<&Term> {
        self.terms.values().filter(|t| t.status == status).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meaning(pos: &str, def: &str) -> Meaning {
        Meaning {
            part_of_speech: pos.into(),
            definition: def.into(),
        }
    }

    #[test]
    fn status_display_and_parse() {
        assert_eq!(StudyStatus::Learning.to_string(), "learning");
        assert_eq!(StudyStatus::Mastered.to_string(), "mastered");
        assert_eq!(
            "mastered".parse::<StudyStatus>().unwrap(),
            StudyStatus::Mastered
        );
        assert_eq!(
            "Learning".parse::<StudyStatus>().unwrap(),
            StudyStatus::Learning
        );
        assert!("done".parse::<StudyStatus>().is_err());
    }

    #[test]
    fn library_keys_are_lowercased() {
        let mut library = Library::new();
        library.insert(Term::new("Ambiguous", vec![meaning("adj", "unclear")]));

        assert!(library.contains("ambiguous"));
        assert!(library.contains("AMBIGUOUS"));
        assert_eq!(library.get("ambiguous").unwrap().text, "Ambiguous");
        assert_eq!(library.len(), 1);

        // Same key replaces rather than duplicates.
        let replaced = library.insert(Term::new("ambiguous", vec![meaning("adj", "vague")]));
        assert!(replaced.is_some());
        assert_eq!(library.len(), 1);
        assert_eq!(
            library.get("ambiguous").unwrap().primary_definition(),
            Some("vague")
        );
    }

    #[test]
    fn merge_details_unions_without_duplicates() {
        let mut library = Library::new();
        library.insert(Term::new("serene", vec![meaning("adj", "calm")]));

        let first = TermDetails {
            examples: vec!["The lake was serene.".into()],
            ..Default::default()
        };
        let second = TermDetails {
            examples: vec![
                "The lake was serene.".into(),
                "A serene morning.".into(),
            ],
            synonyms: vec!["calm".into()],
            ..Default::default()
        };

        assert!(library.merge_details("serene", &first));
        assert!(library.merge_details("serene", &second));

        let details = library.get("serene").unwrap().details.as_ref().unwrap();
        assert_eq!(details.examples.len(), 2);
        assert_eq!(details.synonyms, vec!["calm".to_string()]);
        assert!(!library.merge_details("absent", &first));
    }

    #[test]
    fn set_status_refreshes_timestamp() {
        let mut library = Library::new();
        library.insert(Term::new("serene", vec![meaning("adj", "calm")]));
        let before = library.get("serene").unwrap().updated_at;

        assert!(library.set_status("serene", StudyStatus::Mastered));
        let term = library.get("serene").unwrap();
        assert_eq!(term.status, StudyStatus::Mastered);
        assert!(term.updated_at >= before);
        assert!(!library.set_status("absent", StudyStatus::Mastered));
    }

    #[test]
    fn library_serde_roundtrip() {
        let mut library = Library::new();
        let mut term = Term::new("ambiguous", vec![meaning("adjective", "open to more than one interpretation")]);
        term.details = Some(TermDetails {
            examples: vec!["The contract was ambiguous in places.".into()],
            ..Default::default()
        });
        library.insert(term);

        let json = serde_json::to_string(&library).unwrap();
        let loaded: Library = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get("ambiguous").unwrap().first_example(),
            Some("The contract was ambiguous in places.")
        );
        assert_eq!(loaded.get("ambiguous").unwrap().status, StudyStatus::Learning);
    }
}
