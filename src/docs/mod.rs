//! Documentation search index
//!
//! Loads the search-index payload a static documentation generator emits
//! (`search_index.js`) and answers lookups against it. The store is built
//! once and is read-only afterwards, so it can be shared freely.
//!
//! # Usage
//!
//! ```rust
//! use docsi::docs::{IndexStore, SearchField, SearchOptions};
//!
//! let raw = r##"var documenterSearchIndex = {"docs": [
//!     {"location": "#Pkg.Model", "page": "API", "title": "Pkg.Model",
//!      "category": "type", "text": "Models hold the parameters"}
//! ]}"##;
//! let store = IndexStore::load(raw)?;
//!
//! // Search titles only
//! let options = SearchOptions::new().fields([SearchField::Title]).limit(10);
//! for record in store.search("model", &options)? {
//!     println!("{} ({})", record.title, record.category);
//! }
//!
//! // Look up an anchor
//! let record = store.get_by_location("#Pkg.Model")?;
//! assert_eq!(record.page, "API");
//! # Ok::<(), docsi::docs::IndexError>(())
//! ```

mod error;
mod payload;
mod query;
mod types;

pub use error::{IndexError, Result, SchemaError};
pub use payload::{INDEX_KEY, REQUIRED_FIELDS, parse_records};
pub use query::{Matches, SearchField, SearchOptions};
pub use types::{Category, DocRecord, IndexStore};
