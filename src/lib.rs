//! Folio - in-process full-text search for folders and content items
//!
//! Folio indexes two record kinds (folders and content items) into a
//! namespaced inverted index and answers keyword queries with ranked,
//! snippet-bearing results.
//!
//! # Quick Start
//!
//! ```
//! use folio::{ContentRecord, FolderRecord, SearchEngine, SearchOptions};
//!
//! let engine = SearchEngine::new();
//! engine.index_folders(&[FolderRecord::new("f1", "Recipes")]);
//! engine.index_content(&[ContentRecord::new(
//!     "c1",
//!     "f1",
//!     "Pasta Recipe",
//!     "A simple pasta recipe with garlic and olive oil",
//! )]);
//!
//! let results = engine.search("garlic", &SearchOptions::default());
//! assert_eq!(results[0].id, "c1");
//! ```
//!
//! # Architecture
//!
//! Record and result types live in `folio-core`; the tokenizer, index,
//! scorer, snippet generator and [`SearchEngine`] live in `folio-search`.
//! This crate re-exports both.

pub use folio_core::*;
pub use folio_search::*;
