//! The `lexdrill list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexdrill_core::model::StudyStatus;
use lexdrill_store::library::LibraryStore;

pub fn execute(library_path: PathBuf, status: Option<String>) -> Result<()> {
    let filter: Option<StudyStatus> = status
        .map(|s| s.parse().map_err(|e: String| anyhow::anyhow!(e)))
        .transpose()?;

    let library = LibraryStore::new(library_path).load()?;

    let mut table = Table::new();
    table.set_header(vec![
        "Term",
        "Status",
        "Part of speech",
        "Definition",
        "Examples",
    ]);

    let mut shown = 0usize;
    for term in library.terms() {
        if let Some(filter) = filter {
            if term.status != filter {
                continue;
            }
        }
        let meaning = term.meanings.first();
        let example_count = term.details.as_ref().map(|d| d.examples.len()).unwrap_or(0);
        table.add_row(vec![
            Cell::new(&term.text),
            Cell::new(term.status),
            Cell::new(meaning.map(|m| m.part_of_speech.as_str()).unwrap_or("-")),
            Cell::new(meaning.map(|m| m.definition.as_str()).unwrap_or("-")),
            Cell::new(example_count),
        ]);
        shown += 1;
    }

    if shown == 0 {
        println!("No terms to show.");
    } else {
        println!("{table}");
        println!("\n{shown} term(s)");
    }
    Ok(())
}
