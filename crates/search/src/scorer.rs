//! Scoring infrastructure for search
//!
//! This module provides:
//! - Scorer trait for pluggable scoring
//! - HeuristicScorer default implementation
//!
//! Scores are fixed-point bonuses per query token. No corpus statistics are
//! tracked, so a record's score depends only on the record and the query.

use crate::tokenizer::tokenize;
use folio_core::{ContentRecord, FolderRecord};

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take a record and the tokenized query and return a relevance
/// score. Higher scores indicate more relevant records.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync for concurrent search operations.
pub trait Scorer: Send + Sync {
    /// Score a content item against the query tokens
    fn score_content(&self, item: &ContentRecord, query_tokens: &[String]) -> u32;

    /// Score a folder against the query tokens
    fn score_folder(&self, folder: &FolderRecord, query_tokens: &[String]) -> u32;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// HeuristicScorer
// ============================================================================

/// Weighted heuristic scorer
///
/// # Content
///
/// For each query token `w`:
/// - `title_token` if `w` is a token of the title
/// - `body_substring` for every body token containing `w`
/// - `title_substring` if the lower-cased title contains `w`
///
/// # Folders
///
/// For each query token `w`:
/// - `folder_name_token` if `w` is a token of the name
/// - `folder_description_token` if `w` is a token of the description
///
/// Folder names are short, intentional labels and outweigh descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicScorer {
    /// Exact title token match (default 10)
    pub title_token: u32,
    /// Per body token containing the query token (default 2)
    pub body_substring: u32,
    /// Raw title substring match (default 5)
    pub title_substring: u32,
    /// Exact folder name token match (default 15)
    pub folder_name_token: u32,
    /// Exact folder description token match (default 5)
    pub folder_description_token: u32,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        HeuristicScorer {
            title_token: 10,
            body_substring: 2,
            title_substring: 5,
            folder_name_token: 15,
            folder_description_token: 5,
        }
    }
}

impl HeuristicScorer {
    /// Create a scorer with the default weights
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scorer for HeuristicScorer {
    fn score_content(&self, item: &ContentRecord, query_tokens: &[String]) -> u32 {
        let title_tokens = tokenize(&item.title);
        let body_tokens = tokenize(&item.body);
        let title_lower = item.title.to_lowercase();

        let mut score: u32 = 0;
        for word in query_tokens {
            if title_tokens.contains(word) {
                score = score.saturating_add(self.title_token);
            }

            let body_hits = body_tokens
                .iter()
                .filter(|token| token.contains(word.as_str()))
                .count() as u32;
            score = score.saturating_add(self.body_substring.saturating_mul(body_hits));

            if title_lower.contains(word.as_str()) {
                score = score.saturating_add(self.title_substring);
            }
        }
        score
    }

    fn score_folder(&self, folder: &FolderRecord, query_tokens: &[String]) -> u32 {
        let name_tokens = tokenize(&folder.name);
        let description_tokens = folder
            .description
            .as_deref()
            .map(tokenize)
            .unwrap_or_default();

        let mut score: u32 = 0;
        for word in query_tokens {
            if name_tokens.contains(word) {
                score = score.saturating_add(self.folder_name_token);
            }
            if description_tokens.contains(word) {
                score = score.saturating_add(self.folder_description_token);
            }
        }
        score
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

// ============================================================================
// Tests
// ============================================================================
