//! The `lexdrill import` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_store::library::LibraryStore;
use lexdrill_store::wordlist::parse_wordlist;

pub fn execute(library_path: PathBuf, path: PathBuf) -> Result<()> {
    let wordlist = parse_wordlist(&path)?;

    let store = LibraryStore::new(library_path);
    let mut library = store.load()?;

    let mut added = 0usize;
    let mut merged = 0usize;
    for term in wordlist.terms {
        if library.contains(&term.text) {
            // Existing entries keep their status; only details are merged.
            if let Some(details) = &term.details {
                library.merge_details(&term.text, details);
            }
            merged += 1;
        } else {
            library.insert(term);
            added += 1;
        }
    }
    store.save(&library)?;

    println!(
        "Imported '{}': {added} term(s) added, {merged} merged.",
        wordlist.name
    );
    Ok(())
}
