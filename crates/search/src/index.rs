//! Inverted index for folder and content records
//!
//! This module provides:
//! - IndexKey: `"<kind>:<token>"` index keys
//! - Namespace: token → record IDs for one record kind
//! - InvertedIndex: one namespace per record kind
//!
//! # Architectural Rules
//!
//! - The index stores record IDs only, never record content
//! - A namespace is only ever replaced whole; there is no incremental update
//!
//! Namespaces are built outside any lock and swapped in, so the engine can
//! publish a new generation atomically.

use crate::tokenizer::tokenize;
use folio_core::{ContentRecord, FolderRecord, RecordKind};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;

// ============================================================================
// IndexKey
// ============================================================================

/// A namespaced index key, borrowed from the index it was read from
///
/// Displays as `"<kind>:<token>"`, e.g. `"folder:recipes"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexKey<'a> {
    /// Namespace
    pub kind: RecordKind,
    /// Token
    pub token: &'a str,
}

impl<'a> IndexKey<'a> {
    /// Create a new key
    pub fn new(kind: RecordKind, token: &'a str) -> Self {
        IndexKey { kind, token }
    }
}

impl fmt::Display for IndexKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.token)
    }
}

// ============================================================================
// Namespace
// ============================================================================

/// Token → record IDs for a single record kind
///
/// Both levels are ordered maps, so iteration over tokens and over the IDs
/// under a token is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    postings: BTreeMap<String, BTreeSet<String>>,
}

impl Namespace {
    /// Create an empty namespace
    pub fn new() -> Self {
        Namespace {
            postings: BTreeMap::new(),
        }
    }

    /// Build a namespace from folder records
    ///
    /// Indexed fields: name, description.
    pub fn from_folders<'a>(folders: impl IntoIterator<Item = &'a FolderRecord>) -> Self {
        let mut ns = Namespace::new();
        for folder in folders {
            ns.add_field(&folder.id, &folder.name);
            if let Some(description) = &folder.description {
                ns.add_field(&folder.id, description);
            }
        }
        ns
    }

    /// Build a namespace from content records
    ///
    /// Indexed fields: title, body, each tag.
    pub fn from_content<'a>(items: impl IntoIterator<Item = &'a ContentRecord>) -> Self {
        let mut ns = Namespace::new();
        for item in items {
            ns.add_field(&item.id, &item.title);
            ns.add_field(&item.id, &item.body);
            for tag in &item.tags {
                ns.add_field(&item.id, tag);
            }
        }
        ns
    }

    /// Tokenize one field and map each token to `id`
    pub fn add_field(&mut self, id: &str, text: &str) {
        for token in tokenize(text) {
            let ids = self.postings.entry(token).or_default();
            if !ids.contains(id) {
                ids.insert(id.to_string());
            }
        }
    }

    /// Record IDs containing `token`
    pub fn lookup(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.postings.get(token)
    }

    /// Union of the IDs under each of `tokens`
    pub fn candidates<'a>(&'a self, tokens: &[String]) -> BTreeSet<&'a str> {
        tokens
            .iter()
            .filter_map(|token| self.lookup(token))
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect()
    }

    /// All tokens in ascending order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Tokens starting with `prefix`, ascending; includes `prefix` itself
    /// when indexed
    pub fn tokens_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.postings
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(token, _)| token.as_str())
            .take_while(move |token| token.starts_with(prefix))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if the namespace is empty
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Namespaced inverted index
///
/// Holds one [`Namespace`] per record kind. Folder and content tokens never
/// collide even when spelled identically.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    content: Namespace,
    folder: Namespace,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace for a record kind
    pub fn namespace(&self, kind: RecordKind) -> &Namespace {
        match kind {
            RecordKind::Content => &self.content,
            RecordKind::Folder => &self.folder,
        }
    }

    /// Replace a kind's namespace wholesale, returning the previous one
    pub fn replace(&mut self, kind: RecordKind, namespace: Namespace) -> Namespace {
        let slot = match kind {
            RecordKind::Content => &mut self.content,
            RecordKind::Folder => &mut self.folder,
        };
        std::mem::replace(slot, namespace)
    }

    /// Lookup record IDs under `"<kind>:<token>"`
    pub fn lookup(&self, kind: RecordKind, token: &str) -> Option<&BTreeSet<String>> {
        self.namespace(kind).lookup(token)
    }

    /// Union of candidate IDs for `tokens` within one kind
    pub fn candidates<'a>(&'a self, kind: RecordKind, tokens: &[String]) -> BTreeSet<&'a str> {
        self.namespace(kind).candidates(tokens)
    }

    /// All keys, content namespace first, tokens ascending within each
    pub fn keys(&self) -> impl Iterator<Item = IndexKey<'_>> + '_ {
        RecordKind::ALL.into_iter().flat_map(move |kind| {
            self.namespace(kind)
                .tokens()
                .map(move |token| IndexKey::new(kind, token))
        })
    }

    /// Number of distinct keys across both namespaces
    pub fn len(&self) -> usize {
        self.content.len() + self.folder.len()
    }

    /// Check if both namespaces are empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.folder.is_empty()
    }

    /// Drop every key
    pub fn clear(&mut self) {
        self.content = Namespace::new();
        self.folder = Namespace::new();
    }
}

// ============================================================================
// Tests
// ============================================================================
