//! Keyword selection.
//!
//! Keeps the first non-stopwords in text order. No frequency ranking and no
//! deduplication: a word repeated in the input is repeated in the output.

use super::lexicon::Lexicon;

/// Maximum number of keywords returned
pub const MAX_KEYWORDS: usize = 5;

/// Keyword extractor over already-tokenized words
pub struct KeywordExtractor {
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            max_keywords: MAX_KEYWORDS,
        }
    }

    /// Select keywords from normalized words
    pub fn extract(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|word| !Lexicon::is_stopword(word))
            .take(self.max_keywords)
            .cloned()
            .collect()
    }
}
