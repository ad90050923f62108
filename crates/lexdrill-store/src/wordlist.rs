//! TOML word-list import.
//!
//! Word lists are how a library gets seeded in bulk: a `[wordlist]` header
//! plus one `[[terms]]` table per vocabulary entry.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lexdrill_core::model::{Meaning, Term, TermDetails};

/// Intermediate TOML structure for word-list files.
#[derive(Debug, Deserialize)]
struct TomlWordlistFile {
    wordlist: TomlWordlistHeader,
    #[serde(default)]
    terms: Vec<TomlTerm>,
}

#[derive(Debug, Deserialize)]
struct TomlWordlistHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlTerm {
    text: String,
    #[serde(default)]
    meanings: Vec<TomlMeaning>,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    collocations: Vec<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TomlMeaning {
    part_of_speech: String,
    definition: String,
}

/// A parsed word list, ready to merge into a library.
#[derive(Debug, Clone)]
pub struct Wordlist {
    pub name: String,
    pub description: String,
    pub terms: Vec<Term>,
}

/// Parse a word-list TOML file.
pub fn parse_wordlist(path: &Path) -> Result<Wordlist> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list: {}", path.display()))?;
    parse_wordlist_str(&content, path)
}

/// Parse a word-list TOML string (useful for testing).
pub fn parse_wordlist_str(content: &str, source_path: &Path) -> Result<Wordlist> {
    let parsed: TomlWordlistFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut terms = Vec::with_capacity(parsed.terms.len());
    for entry in parsed.terms {
        anyhow::ensure!(
            !entry.text.trim().is_empty(),
            "word list '{}' has a term with empty text",
            parsed.wordlist.name
        );
        anyhow::ensure!(
            !entry.meanings.is_empty(),
            "term '{}' in word list '{}' has no meanings",
            entry.text,
            parsed.wordlist.name
        );

        let meanings = entry
            .meanings
            .into_iter()
            .map(|m| Meaning {
                part_of_speech: m.part_of_speech,
                definition: m.definition,
            })
            .collect();

        let mut term = Term::new(entry.text, meanings);
        let details = TermDetails {
            examples: entry.examples,
            collocations: entry.collocations,
            synonyms: entry.synonyms,
            antonyms: entry.antonyms,
        };
        if details != TermDetails::default() {
            term.details = Some(details);
        }
        terms.push(term);
    }

    Ok(Wordlist {
        name: parsed.wordlist.name,
        description: parsed.wordlist.description,
        terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[wordlist]
name = "Starter words"
description = "A few words to practice with"

[[terms]]
text = "ambiguous"
examples = ["The contract was **ambiguous** in places."]
synonyms = ["unclear", "vague"]

[[terms.meanings]]
part_of_speech = "adjective"
definition = "open to more than one interpretation"

[[terms]]
text = "serene"

[[terms.meanings]]
part_of_speech = "adjective"
definition = "calm and unworried"
"#;

    #[test]
    fn parse_sample_wordlist() {
        let wordlist = parse_wordlist_str(SAMPLE, &PathBuf::from("starter.toml")).unwrap();
        assert_eq!(wordlist.name, "Starter words");
        assert_eq!(wordlist.terms.len(), 2);

        let ambiguous = &wordlist.terms[0];
        assert_eq!(ambiguous.text, "ambiguous");
        assert_eq!(
            ambiguous.primary_definition(),
            Some("open to more than one interpretation")
        );
        assert_eq!(
            ambiguous.first_example(),
            Some("The contract was **ambiguous** in places.")
        );

        let serene = &wordlist.terms[1];
        assert_eq!(serene.text, "serene");
        assert!(serene.details.is_none());
    }

    #[test]
    fn term_without_meanings_is_rejected() {
        let content = r#"
[wordlist]
name = "Broken"

[[terms]]
text = "orphan"
"#;
        let err = parse_wordlist_str(content, &PathBuf::from("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("orphan"));
    }

    #[test]
    fn invalid_toml_carries_the_path() {
        let err = parse_wordlist_str("not toml [", &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }
}
