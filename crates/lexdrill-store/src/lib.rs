//! lexdrill-store — host-side persistence.
//!
//! The engine in `lexdrill-core` owns no storage; this crate holds what the
//! host keeps on disk: the term library, the practice history log, and TOML
//! word-list import.

pub mod history;
pub mod library;
pub mod wordlist;
