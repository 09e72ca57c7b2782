//! Core types for Folio
//!
//! This crate defines the foundational types used throughout the system:
//! - FolderRecord / ContentRecord: Snapshots pushed into the engine
//! - RecordKind: Index namespace discriminator
//! - SearchOptions / SearchScope: Query filters and limits
//! - SearchResult: Ranked hit with snippet
//! - IndexStats: Counters for the current index generation
//! - SearchConfig: `folio.toml` configuration
//! - Error: Error type for the configuration surface

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod records;
pub mod search_types;

pub use config::{SearchConfig, SnippetConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use records::{ContentRecord, FolderRecord, RecordKind};
pub use search_types::{IndexStats, SearchOptions, SearchResult, SearchScope};
