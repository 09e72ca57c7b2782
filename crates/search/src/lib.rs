//! Text search for folders and content items
//!
//! This crate provides:
//! - Tokenizer (lowercase, punctuation-stripped, length > 1)
//! - InvertedIndex with one namespace per record kind
//! - Scorer trait and the HeuristicScorer default implementation
//! - Snippet generation around the first literal query-token match
//! - Fuser trait for merging per-kind results
//! - SearchEngine for indexing, search and suggestions
//!
//! # Usage
//!
//! ```
//! use folio_core::{ContentRecord, SearchOptions, SearchScope};
//! use folio_search::SearchEngine;
//!
//! let engine = SearchEngine::new();
//! engine.index_content(&[ContentRecord::new("c1", "f1", "Pasta Recipe", "garlic and oil")]);
//!
//! let results = engine.search("pasta", &SearchOptions::new().with_scope(SearchScope::Content));
//! assert_eq!(results[0].relevance, 15);
//! assert_eq!(engine.suggestions("gar", None), vec!["garlic"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod fuser;
pub mod index;
pub mod scorer;
pub mod snippet;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::SearchEngine;
pub use fuser::{rank_order, FusedResult, Fuser, SimpleFuser};
pub use index::{IndexKey, InvertedIndex, Namespace};
pub use scorer::{HeuristicScorer, Scorer};
pub use snippet::{generate_snippet, generate_snippet_with};
pub use tokenizer::tokenize;
