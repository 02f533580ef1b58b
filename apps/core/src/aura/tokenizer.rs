//! Whitespace tokenizer.
//!
//! Splits on whitespace, lower-cases, and strips a fixed set of punctuation
//! from both ends of each token. Interior punctuation is kept ("don't",
//! "well-known").

/// Characters trimmed from token edges
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}',
];

/// Tokens of this many chars or fewer are dropped
const MAX_DROPPED_LEN: usize = 2;

/// Normalize a single raw token. Returns `None` when the token is too short
/// once stripped.
pub fn normalize(token: &str) -> Option<String> {
    let word = token.to_lowercase();
    let word = word.trim_matches(EDGE_PUNCTUATION);

    (word.chars().count() > MAX_DROPPED_LEN).then(|| word.to_string())
}

/// Tokenize text into normalized words, preserving input order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_edges_only() {
        assert_eq!(normalize("\"Hello!\""), Some("hello".to_string()));
        assert_eq!(normalize("(well-known)."), Some("well-known".to_string()));
        assert_eq!(normalize("don't"), Some("don't".to_string()));
        assert_eq!(normalize("[{a.b.c}]"), Some("a.b.c".to_string()));
    }

    #[test]
    fn test_short_tokens_dropped_after_stripping() {
        assert_eq!(normalize("ok"), None);
        assert_eq!(normalize("no!!!"), None);
        assert_eq!(normalize("...,"), None);
        assert_eq!(normalize("yes"), Some("yes".to_string()));
    }

    #[test]
    fn test_tokenize_order_and_case() {
        let words = tokenize("I LOVE this,   it is Amazing!\nno way");
        assert_eq!(words, vec!["love", "this", "amazing", "way"]);
    }

    #[test]
    fn test_non_ascii() {
        // Length is counted in chars, not bytes
        assert_eq!(normalize("été"), Some("été".to_string()));
        assert_eq!(normalize("«été»"), Some("«été»".to_string()));
        assert!(tokenize("    ").is_empty());
    }
}
