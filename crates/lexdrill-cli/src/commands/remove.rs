//! The `lexdrill remove` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_store::library::LibraryStore;

pub fn execute(library_path: PathBuf, term: String) -> Result<()> {
    let store = LibraryStore::new(library_path);
    let mut library = store.load()?;

    if library.remove(&term).is_none() {
        anyhow::bail!("'{term}' is not in the library");
    }
    store.save(&library)?;
    println!("Removed '{term}' from the library.");
    Ok(())
}
