//! Search API contract tests
//!
//! Validates the public SearchEngine surface: re-indexing semantics,
//! namespace isolation, scoring order and filters.

use folio_core::{ContentRecord, FolderRecord, RecordKind, SearchOptions, SearchScope};
use folio_search::{tokenize, SearchEngine};

// ============================================================================
// Test Helpers
// ============================================================================

fn recipes_engine() -> SearchEngine {
    let engine = SearchEngine::new();
    engine.index_folders(&[
        FolderRecord::new("f1", "Recipes").with_description("family favorites"),
    ]);
    engine.index_content(&[ContentRecord::new(
        "c1",
        "f1",
        "Pasta Recipe",
        "A simple pasta recipe with garlic and olive oil",
    )]);
    engine
}

fn sample_content() -> Vec<ContentRecord> {
    vec![
        ContentRecord::new("c1", "f1", "Rust ownership", "Borrowing and lifetimes explained")
            .with_tags(["rust", "learning"]),
        ContentRecord::new("c2", "f1", "Sourdough starter", "Feed the starter twice a day")
            .with_tags(["baking"]),
        ContentRecord::new("c3", "f2", "Trip to Seoul", "서울 여행 일정 and hotel notes"),
        ContentRecord::new("c4", "f2", "Packing list", "passport, charger, rust-proof razor"),
    ]
}

fn sample_folders() -> Vec<FolderRecord> {
    vec![
        FolderRecord::new("f1", "Learning").with_description("courses and rust notes"),
        FolderRecord::new("f2", "Travel"),
    ]
}

fn ids(results: &[folio_core::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// "recipe" matches the content title token exactly but not the folder,
/// whose only name token is "recipes"
#[test]
fn test_recipe_query_exact_token_boundary() {
    let engine = recipes_engine();
    let results = engine.search("recipe", &SearchOptions::new().with_scope(SearchScope::All));

    assert_eq!(ids(&results), vec!["c1"]);
    assert_eq!(results[0].relevance, 17);
    assert!(results.iter().all(|r| r.id != "f1"));
}

/// "recipes" reaches only the folder
#[test]
fn test_recipes_query_reaches_folder() {
    let engine = recipes_engine();
    let results = engine.search("recipes", &SearchOptions::default());

    assert_eq!(ids(&results), vec!["f1"]);
    assert_eq!(results[0].relevance, 15);
}

#[test]
fn test_folder_filter_on_content() {
    let engine = recipes_engine();

    let in_f1 = engine.search(
        "garlic",
        &SearchOptions::new()
            .with_folder("f1")
            .with_scope(SearchScope::Content),
    );
    assert_eq!(ids(&in_f1), vec!["c1"]);

    let in_f2 = engine.search(
        "garlic",
        &SearchOptions::new()
            .with_folder("f2")
            .with_scope(SearchScope::Content),
    );
    assert!(in_f2.is_empty());
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_empty_query_returns_nothing() {
    let engine = recipes_engine();
    assert!(engine.search("", &SearchOptions::default()).is_empty());
    assert!(engine.search("   ", &SearchOptions::default()).is_empty());
}

#[test]
fn test_reindex_is_idempotent() {
    let engine = SearchEngine::new();
    engine.index_folders(&sample_folders());
    engine.index_content(&sample_content());

    let queries = ["rust", "starter", "notes", "서울", "travel packing"];
    let before: Vec<_> = queries
        .iter()
        .map(|q| engine.search(q, &SearchOptions::default()))
        .collect();

    engine.index_content(&sample_content());
    engine.index_folders(&sample_folders());

    let after: Vec<_> = queries
        .iter()
        .map(|q| engine.search(q, &SearchOptions::default()))
        .collect();

    assert_eq!(before, after);
}

#[test]
fn test_reindex_replaces_instead_of_merging() {
    let engine = SearchEngine::new();
    engine.index_content(&sample_content());
    assert_eq!(ids(&engine.search("sourdough", &SearchOptions::default())), vec!["c2"]);

    let without_c2: Vec<_> = sample_content()
        .into_iter()
        .filter(|item| item.id != "c2")
        .collect();
    engine.index_content(&without_c2);

    assert!(engine.search("sourdough", &SearchOptions::default()).is_empty());
    assert!(engine.suggestions("sourd", None).is_empty());
    assert_eq!(engine.content_count(), 3);
}

#[test]
fn test_reindex_of_one_kind_keeps_the_other() {
    let engine = SearchEngine::new();
    engine.index_folders(&sample_folders());
    engine.index_content(&sample_content());

    engine.index_content(&[]);

    assert_eq!(engine.content_count(), 0);
    assert_eq!(ids(&engine.search("travel", &SearchOptions::default())), vec!["f2"]);
}

/// Every token of every indexed field finds its record
#[test]
fn test_token_containment() {
    let engine = SearchEngine::new();
    let folders = sample_folders();
    let content = sample_content();
    engine.index_folders(&folders);
    engine.index_content(&content);

    let unlimited = |scope| SearchOptions::new().with_scope(scope).with_limit(usize::MAX);

    for folder in &folders {
        let mut fields = vec![folder.name.clone()];
        fields.extend(folder.description.clone());
        for token in fields.iter().flat_map(|f| tokenize(f)) {
            let results = engine.search(&token, &unlimited(SearchScope::Folder));
            assert!(
                results.iter().any(|r| r.id == folder.id),
                "folder {} missing for token {}",
                folder.id,
                token
            );
        }
    }

    for item in &content {
        let mut fields = vec![item.title.clone(), item.body.clone()];
        fields.extend(item.tags.iter().cloned());
        for token in fields.iter().flat_map(|f| tokenize(f)) {
            let results = engine.search(&token, &unlimited(SearchScope::Content));
            assert!(
                results.iter().any(|r| r.id == item.id),
                "content {} missing for token {}",
                item.id,
                token
            );
        }
    }
}

/// Tag-only matches are found even though tags carry no score
#[test]
fn test_tag_only_match_is_returned() {
    let engine = SearchEngine::new();
    engine.index_content(&sample_content());

    let results = engine.search("baking", &SearchOptions::default());
    assert_eq!(ids(&results), vec!["c2"]);
    assert_eq!(results[0].relevance, 0);
}

#[test]
fn test_title_match_outranks_body_match() {
    let engine = SearchEngine::new();
    engine.index_content(&[
        ContentRecord::new("body", "f1", "Fruit", "one apple in the basket"),
        ContentRecord::new("title", "f1", "apple", "one fruit in the basket"),
    ]);

    let results = engine.search("apple", &SearchOptions::default());
    assert_eq!(ids(&results), vec!["title", "body"]);
    assert!(results[0].relevance > results[1].relevance);
}

#[test]
fn test_namespace_isolation() {
    let engine = SearchEngine::new();
    engine.index_folders(&[FolderRecord::new("f-apple", "apple")]);
    engine.index_content(&[ContentRecord::new("c-apple", "f1", "apple", "")]);

    let folders = engine.search("apple", &SearchOptions::new().with_scope(SearchScope::Folder));
    assert_eq!(ids(&folders), vec!["f-apple"]);
    assert_eq!(folders[0].kind, RecordKind::Folder);

    let content = engine.search("apple", &SearchOptions::new().with_scope(SearchScope::Content));
    assert_eq!(ids(&content), vec!["c-apple"]);
    assert_eq!(content[0].kind, RecordKind::Content);
}

#[test]
fn test_multi_token_query_unions_candidates() {
    let engine = SearchEngine::new();
    engine.index_folders(&sample_folders());
    engine.index_content(&sample_content());

    let results = engine.search("starter passport", &SearchOptions::default());
    let mut found = ids(&results);
    found.sort();
    assert_eq!(found, vec!["c2", "c4"]);
}

#[test]
fn test_hangul_query() {
    let engine = SearchEngine::new();
    engine.index_content(&sample_content());

    let results = engine.search("서울", &SearchOptions::default());
    assert_eq!(ids(&results), vec!["c3"]);
    assert!(results[0].snippet.contains("서울"));
}

#[test]
fn test_unknown_folder_filter_is_empty_not_error() {
    let engine = SearchEngine::new();
    engine.index_content(&sample_content());

    let results = engine.search(
        "rust",
        &SearchOptions::new()
            .with_folder("missing")
            .with_scope(SearchScope::Content),
    );
    assert!(results.is_empty());
}

#[test]
fn test_limit_caps_merged_results() {
    let engine = SearchEngine::new();
    engine.index_folders(&sample_folders());
    engine.index_content(&sample_content());

    let all = engine.search("rust", &SearchOptions::default());
    assert!(all.len() >= 3);

    let capped = engine.search("rust", &SearchOptions::new().with_limit(1));
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0], all[0]);
}

#[test]
fn test_long_body_snippet_is_bounded() {
    let engine = SearchEngine::new();
    let body = std::iter::repeat("lorem ipsum dolores")
        .take(100)
        .collect::<Vec<_>>()
        .join(" ");
    engine.index_content(&[ContentRecord::new("c1", "f1", "Filler", body)]);

    let results = engine.search("dolores", &SearchOptions::default());
    let snippet = &results[0].snippet;
    assert!(snippet.ends_with("..."));
    assert_eq!(snippet.chars().count(), 153);
}

#[test]
fn test_result_serializes_for_ui() {
    let engine = recipes_engine();
    let results = engine.search("garlic", &SearchOptions::default());

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["id"], "c1");
    assert_eq!(json[0]["type"], "content");
    assert_eq!(json[0]["folderId"], "f1");
}

#[test]
fn test_suggestions_across_namespaces() {
    let engine = SearchEngine::new();
    engine.index_folders(&[FolderRecord::new("f1", "Travel plans")]);
    engine.index_content(&[ContentRecord::new("c1", "f1", "Trip", "travelling light")]);

    assert_eq!(
        engine.suggestions("weekend trav", None),
        vec!["weekend travel", "weekend travelling"]
    );
}
