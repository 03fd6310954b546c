//! docsi - documentation search index browser
//!
//! Loads the static search index of a generated documentation site and
//! answers title/text lookups against it.

pub mod docs;

// Re-export commonly used types
pub use docs::{Category, DocRecord, IndexError, IndexStore, SearchField, SearchOptions};
