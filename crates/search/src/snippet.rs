//! Snippet generation for result previews
//!
//! Snippets are cut from the raw text: words are split on whitespace only,
//! so casing and punctuation survive for display.

use folio_core::SnippetConfig;

/// Marker appended to a snippet cut at the length limit
pub const ELLIPSIS: &str = "...";

/// Build a snippet with the default window (10 words of lead-in, 25 words
/// wide) and the given length limit.
///
/// # Example
///
/// ```
/// use folio_search::snippet::generate_snippet;
///
/// let tokens = vec!["garlic".to_string()];
/// let snippet = generate_snippet("Roast the garlic first", &tokens, 150);
/// assert_eq!(snippet, "Roast the garlic first");
/// ```
pub fn generate_snippet(body: &str, query_tokens: &[String], max_length: usize) -> String {
    let config = SnippetConfig {
        max_length,
        ..SnippetConfig::default()
    };
    generate_snippet_with(body, query_tokens, &config)
}

/// Build a snippet using an explicit window configuration.
///
/// The window starts `context_words` before the first word whose lower-cased
/// form equals a query token, or at the first word when none does. Matching
/// is against whole raw words, so `"garlic,"` does not match `garlic`.
pub fn generate_snippet_with(body: &str, query_tokens: &[String], config: &SnippetConfig) -> String {
    let words: Vec<&str> = body.split_whitespace().collect();

    let start = words
        .iter()
        .position(|word| {
            let lower = word.to_lowercase();
            query_tokens.iter().any(|token| *token == lower)
        })
        .map(|pos| pos.saturating_sub(config.context_words))
        .unwrap_or(0);

    let snippet = words
        .iter()
        .skip(start)
        .take(config.window_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    truncate_chars(snippet, config.max_length)
}

fn truncate_chars(text: String, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push_str(ELLIPSIS);
            truncated
        }
        None => text,
    }
}
