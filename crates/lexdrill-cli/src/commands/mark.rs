//! The `lexdrill mark` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_core::model::StudyStatus;
use lexdrill_store::library::LibraryStore;

pub fn execute(library_path: PathBuf, term: String, status: String) -> Result<()> {
    let status: StudyStatus = status.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let store = LibraryStore::new(library_path);
    let mut library = store.load()?;

    if !library.set_status(&term, status) {
        anyhow::bail!("'{term}' is not in the library");
    }
    store.save(&library)?;
    println!("Marked '{term}' as {status}.");
    Ok(())
}
