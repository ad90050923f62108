//! The `lexdrill add` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_core::model::{Meaning, Term, TermDetails};
use lexdrill_store::library::LibraryStore;

pub fn execute(
    library_path: PathBuf,
    term_text: String,
    definition: String,
    part_of_speech: String,
    examples: Vec<String>,
) -> Result<()> {
    anyhow::ensure!(!term_text.trim().is_empty(), "the term must not be empty");

    let store = LibraryStore::new(library_path);
    let mut library = store.load()?;

    let mut term = Term::new(
        term_text.clone(),
        vec![Meaning {
            part_of_speech,
            definition,
        }],
    );
    if !examples.is_empty() {
        term.details = Some(TermDetails {
            examples,
            ..Default::default()
        });
    }

    let replaced = library.insert(term);
    store.save(&library)?;

    if replaced.is_some() {
        println!("Updated '{term_text}' in the library.");
    } else {
        println!("Added '{term_text}' to the library.");
    }
    Ok(())
}
