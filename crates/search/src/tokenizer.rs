//! Text tokenizer for search operations
//!
//! Pipeline: lowercase → punctuation to space → split on whitespace
//!           → drop single-character tokens
//!
//! No stemming and no stopwords: a token is exactly the lower-cased word as
//! it appears in the text.

/// Word characters survive tokenization; everything else except whitespace
/// becomes a separator. `is_alphanumeric` covers the Hangul syllable block.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize text into searchable terms.
///
/// 1. Lowercase
/// 2. Replace every character that is neither a word character nor
///    whitespace with a space
/// 3. Split on runs of whitespace
/// 4. Drop tokens of a single character
///
/// # Example
///
/// ```
/// use folio_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, World! I'm here");
/// assert_eq!(tokens, vec!["hello", "world", "here"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|s| s.chars().nth(1).is_some())
        .map(String::from)
        .collect()
}
