//! Core search types
//!
//! This module defines the request and result types of the search API:
//! - SearchScope: Which record kinds a query covers
//! - SearchOptions: Filters and limits for a single query
//! - SearchResult: Individual ranked hit with snippet
//! - IndexStats: Counters describing the current index generation

use crate::records::RecordKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// SearchScope
// ============================================================================

/// Record kinds covered by a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Folders and content items (default)
    #[default]
    All,
    /// Content items only
    Content,
    /// Folders only
    Folder,
}

impl SearchScope {
    /// Whether this scope covers the given record kind
    pub fn includes(&self, kind: RecordKind) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Content => kind == RecordKind::Content,
            SearchScope::Folder => kind == RecordKind::Folder,
        }
    }
}

// ============================================================================
// SearchOptions
// ============================================================================

/// Options for a single query
///
/// # Examples
///
/// ```
/// use folio_core::{SearchOptions, SearchScope};
///
/// let opts = SearchOptions::new()
///     .with_scope(SearchScope::Content)
///     .with_folder("f1")
///     .with_limit(5);
///
/// assert_eq!(opts.folder_id.as_deref(), Some("f1"));
/// assert_eq!(opts.limit, Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Exact-match post-filter on content results; folders are unaffected
    pub folder_id: Option<String>,

    /// Record kinds to search
    pub scope: SearchScope,

    /// Maximum results after sorting; `None` uses the configured default
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Default options: all kinds, no folder filter, configured limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: restrict content results to one folder
    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Builder: set scope
    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Builder: set result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ============================================================================
// SearchResult
// ============================================================================

/// A ranked search hit
///
/// Built fresh per query and never stored. `snippet` is plain text; callers
/// rendering into markup must escape it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Record ID
    pub id: String,
    /// Content title or folder name
    pub title: String,
    /// Excerpt around the first literal query-token match
    pub snippet: String,
    /// Record kind
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Owning folder (content results only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Heuristic relevance; only meaningful for ordering
    pub relevance: u32,
}

// ============================================================================
// IndexStats
// ============================================================================

/// Counters describing the current index generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Indexed folders
    pub folders: usize,
    /// Indexed content items
    pub content: usize,
    /// Distinct index keys in the folder namespace
    pub folder_terms: usize,
    /// Distinct index keys in the content namespace
    pub content_terms: usize,
}

impl IndexStats {
    /// Total distinct index keys across both namespaces
    pub fn total_terms(&self) -> usize {
        self.folder_terms + self.content_terms
    }
}
