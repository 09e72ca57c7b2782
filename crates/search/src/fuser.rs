//! Fusion of per-kind result lists
//!
//! This module provides:
//! - Fuser trait for merging folder and content results into one ranking
//! - SimpleFuser: concatenation + deterministic sort (default)

use folio_core::SearchResult;
use std::cmp::Ordering;

// ============================================================================
// FusedResult
// ============================================================================

/// Result of fusing per-kind result lists
#[derive(Debug, Clone)]
pub struct FusedResult {
    /// Final ranked list
    pub results: Vec<SearchResult>,
    /// Whether results were cut at the limit
    pub truncated: bool,
}

impl FusedResult {
    /// Create a new FusedResult
    pub fn new(results: Vec<SearchResult>, truncated: bool) -> Self {
        FusedResult { results, truncated }
    }
}

// ============================================================================
// Fuser Trait
// ============================================================================

/// Pluggable fusion interface
///
/// Fusers combine the result lists of each searched record kind into a
/// single ranked list. Every result carries its own kind, so the lists are
/// passed untagged.
///
/// # Thread Safety
///
/// Fusers must be Send + Sync; the engine is shared across threads.
pub trait Fuser: Send + Sync {
    /// Fuse per-kind results into one list truncated to `limit` items
    fn fuse(&self, results: Vec<Vec<SearchResult>>, limit: usize) -> FusedResult;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// SimpleFuser
// ============================================================================

/// Simple fusion: concatenate, sort, take the first `limit`
///
/// Order is total: relevance descending, then record ID ascending, then
/// kind (content before folder). No score normalization between kinds.
#[derive(Debug, Clone, Default)]
pub struct SimpleFuser;

impl SimpleFuser {
    /// Create a new SimpleFuser
    pub fn new() -> Self {
        SimpleFuser
    }
}

/// Ranking order shared by every result list the engine returns
pub fn rank_order(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.relevance
        .cmp(&a.relevance)
        .then_with(|| a.id.cmp(&b.id))
        .then_with(|| a.kind.cmp(&b.kind))
}

impl Fuser for SimpleFuser {
    fn fuse(&self, results: Vec<Vec<SearchResult>>, limit: usize) -> FusedResult {
        let mut all: Vec<SearchResult> = results.into_iter().flatten().collect();

        all.sort_by(rank_order);

        let truncated = all.len() > limit;
        all.truncate(limit);

        FusedResult::new(all, truncated)
    }

    fn name(&self) -> &str {
        "simple"
    }
}

// ============================================================================
// Tests
// ============================================================================
