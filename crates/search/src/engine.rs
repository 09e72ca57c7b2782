//! Search engine: index ownership and query orchestration
//!
//! This module provides:
//! - SearchEngine, which owns the folder and content snapshots plus the
//!   inverted index built from them
//! - Snapshot re-indexing per record kind
//! - Query orchestration (candidate lookup, scoring, snippets, fusion)
//! - Prefix suggestions
//!
//! # Architecture
//!
//! ```text
//! index_folders / index_content          search / suggestions
//!        │  build outside lock                  │  read lock
//!        ▼                                      ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ RwLock<EngineState>                                      │
//! │   folders: id → FolderRecord   content: id → ContentRecord│
//! │   index:   folder:<token> → ids, content:<token> → ids   │
//! └──────────────────────────────────────────────────────────┘
//!        ▲ write lock only for the swap          │
//!                                                ▼
//!                               Scorer → snippet → Fuser → results
//! ```
//!
//! There is no global instance. Callers own a `SearchEngine` and share it by
//! reference or `Arc`.

use crate::fuser::{Fuser, SimpleFuser};
use crate::index::{InvertedIndex, Namespace};
use crate::scorer::{HeuristicScorer, Scorer};
use crate::snippet::generate_snippet_with;
use crate::tokenizer::tokenize;
use folio_core::{
    ContentRecord, FolderRecord, IndexStats, RecordKind, Result, SearchConfig, SearchOptions,
    SearchResult,
};
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Snapshot of both collections and the index built from them
#[derive(Debug, Default)]
struct EngineState {
    folders: HashMap<String, FolderRecord>,
    content: HashMap<String, ContentRecord>,
    index: InvertedIndex,
}

/// In-process text search over folders and content items
///
/// Re-index calls replace one collection wholesale; queries never mutate
/// state. A re-index builds the new generation without holding the lock and
/// takes the write lock only to swap it in, so concurrent readers see either
/// the old or the new generation, never a partial one.
pub struct SearchEngine {
    state: RwLock<EngineState>,
    scorer: Arc<dyn Scorer>,
    fuser: Arc<dyn Fuser>,
    config: SearchConfig,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Create an empty engine with the default config, scorer and fuser
    pub fn new() -> Self {
        SearchEngine {
            state: RwLock::new(EngineState::default()),
            scorer: Arc::new(HeuristicScorer::default()),
            fuser: Arc::new(SimpleFuser),
            config: SearchConfig::default(),
        }
    }

    /// Builder: set config
    ///
    /// The config is validated first, so a zero limit or an empty snippet
    /// window is rejected here rather than silently emptying every result.
    pub fn with_config(mut self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: set custom fuser
    pub fn with_fuser(mut self, fuser: Arc<dyn Fuser>) -> Self {
        self.fuser = fuser;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ========================================================================
    // Indexing
    // ========================================================================

    /// Replace the folder collection and its index namespace
    ///
    /// `folders` must be the complete current collection. When an ID repeats,
    /// the last occurrence wins.
    pub fn index_folders(&self, folders: &[FolderRecord]) {
        let records: HashMap<String, FolderRecord> = folders
            .iter()
            .map(|folder| (folder.id.clone(), folder.clone()))
            .collect();
        let namespace = Namespace::from_folders(records.values());
        let (count, terms) = (records.len(), namespace.len());

        {
            let mut state = self.state.write();
            state.folders = records;
            state.index.replace(RecordKind::Folder, namespace);
        }

        info!(
            target: "folio::search",
            kind = %RecordKind::Folder,
            records = count,
            terms,
            "Index rebuilt"
        );
    }

    /// Replace the content collection and its index namespace
    ///
    /// `items` must be the complete current collection. When an ID repeats,
    /// the last occurrence wins.
    pub fn index_content(&self, items: &[ContentRecord]) {
        let records: HashMap<String, ContentRecord> = items
            .iter()
            .map(|item| (item.id.clone(), item.clone()))
            .collect();
        let namespace = Namespace::from_content(records.values());
        let (count, terms) = (records.len(), namespace.len());

        {
            let mut state = self.state.write();
            state.content = records;
            state.index.replace(RecordKind::Content, namespace);
        }

        info!(
            target: "folio::search",
            kind = %RecordKind::Content,
            records = count,
            terms,
            "Index rebuilt"
        );
    }

    /// Drop both collections and the whole index
    pub fn clear(&self) {
        *self.state.write() = EngineState::default();
        info!(target: "folio::search", "Index cleared");
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Search folders and content items
    ///
    /// # Flow
    ///
    /// 1. Tokenize the query once (no tokens → empty result)
    /// 2. For each kind in scope, union the candidate IDs of every token
    /// 3. Apply the folder filter to content candidates
    /// 4. Score and build a snippet for each candidate
    /// 5. Fuse both kinds, sort, truncate to the limit
    ///
    /// Ties on relevance are broken by record ID, then kind.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return vec![];
        }
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return vec![];
        }

        let start = Instant::now();
        let limit = options.limit.unwrap_or(self.config.default_limit);
        let mut per_kind = Vec::with_capacity(RecordKind::ALL.len());
        let mut candidates_considered = 0;

        {
            let state = self.state.read();

            if options.scope.includes(RecordKind::Content) {
                let candidates = state.index.candidates(RecordKind::Content, &tokens);
                candidates_considered += candidates.len();
                let results = self.content_results(&state, candidates, &tokens, options);
                per_kind.push(results);
            }

            if options.scope.includes(RecordKind::Folder) {
                let candidates = state.index.candidates(RecordKind::Folder, &tokens);
                candidates_considered += candidates.len();
                let results = self.folder_results(&state, candidates, &tokens);
                per_kind.push(results);
            }
        }

        let fused = self.fuser.fuse(per_kind, limit);

        debug!(
            target: "folio::search",
            tokens = tokens.len(),
            candidates = candidates_considered,
            results = fused.results.len(),
            truncated = fused.truncated,
            scorer = self.scorer.name(),
            fuser = self.fuser.name(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "Search complete"
        );

        fused.results
    }

    fn content_results(
        &self,
        state: &EngineState,
        candidates: BTreeSet<&str>,
        tokens: &[String],
        options: &SearchOptions,
    ) -> Vec<SearchResult> {
        candidates
            .into_iter()
            .filter_map(|id| state.content.get(id))
            .filter(|item| {
                options
                    .folder_id
                    .as_ref()
                    .map_or(true, |folder_id| &item.folder_id == folder_id)
            })
            .map(|item| SearchResult {
                id: item.id.clone(),
                title: item.title.clone(),
                snippet: generate_snippet_with(&item.body, tokens, &self.config.snippet),
                kind: RecordKind::Content,
                folder_id: Some(item.folder_id.clone()),
                relevance: self.scorer.score_content(item, tokens),
            })
            .collect()
    }

    fn folder_results(
        &self,
        state: &EngineState,
        candidates: BTreeSet<&str>,
        tokens: &[String],
    ) -> Vec<SearchResult> {
        candidates
            .into_iter()
            .filter_map(|id| state.folders.get(id))
            .map(|folder| SearchResult {
                id: folder.id.clone(),
                title: folder.name.clone(),
                snippet: folder
                    .description
                    .as_deref()
                    .map(|text| generate_snippet_with(text, tokens, &self.config.snippet))
                    .unwrap_or_default(),
                kind: RecordKind::Folder,
                folder_id: None,
                relevance: self.scorer.score_folder(folder, tokens),
            })
            .collect()
    }

    /// Complete the last word of `query` from indexed tokens
    ///
    /// Every indexed token (either kind) that extends the last query token
    /// yields one suggestion: the preceding query tokens followed by the
    /// completion. Suggestions are distinct and ordered by completion token.
    /// `limit` defaults to the configured suggestion limit.
    pub fn suggestions(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        let mut tokens = tokenize(query);
        let Some(prefix) = tokens.pop() else {
            return vec![];
        };
        let limit = limit.unwrap_or(self.config.suggestion_limit);
        let lead = tokens.join(" ");

        let state = self.state.read();
        let index = &state.index;
        let prefix = prefix.as_str();
        let completions: BTreeSet<&str> = RecordKind::ALL
            .into_iter()
            .flat_map(|kind| index.namespace(kind).tokens_with_prefix(prefix))
            .filter(|token| *token != prefix)
            .collect();

        let suggestions: Vec<String> = completions
            .into_iter()
            .take(limit)
            .map(|token| {
                if lead.is_empty() {
                    token.to_string()
                } else {
                    format!("{} {}", lead, token)
                }
            })
            .collect();

        debug!(
            target: "folio::search",
            prefix = %prefix,
            suggestions = suggestions.len(),
            "Suggestions complete"
        );

        suggestions
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Counters for the current index generation
    pub fn stats(&self) -> IndexStats {
        let state = self.state.read();
        let mut stats = IndexStats {
            folders: state.folders.len(),
            content: state.content.len(),
            ..IndexStats::default()
        };
        for key in state.index.keys() {
            match key.kind {
                RecordKind::Folder => stats.folder_terms += 1,
                RecordKind::Content => stats.content_terms += 1,
            }
        }
        stats
    }

    /// Number of indexed folders
    pub fn folder_count(&self) -> usize {
        self.state.read().folders.len()
    }

    /// Number of indexed content items
    pub fn content_count(&self) -> usize {
        self.state.read().content.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
