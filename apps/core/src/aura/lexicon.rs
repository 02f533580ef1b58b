//! Static word lists.
//!
//! Stopwords, positive and negative vocabularies. Built once on first use and
//! shared read-only for the lifetime of the process.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words excluded from keyword extraction
const STOPWORDS: &[&str] = &[
    "the", "and", "but", "for", "are", "with", "was", "were", "been", "have", "has", "had", "will",
    "would", "could", "should", "this", "that", "they", "them", "their", "there", "where", "when",
    "what", "who", "how", "why", "not", "can", "did", "like",
];

/// Words that push sentiment up
const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "amazing",
    "wonderful",
    "happy",
    "love",
    "beautiful",
    "fantastic",
    "awesome",
    "excellent",
    "perfect",
    "brilliant",
    "stunning",
    "incredible",
    "marvelous",
    "superb",
    "outstanding",
    "magnificent",
    "delightful",
    "exciting",
    "thrilled",
    "ecstatic",
    "overjoyed",
    "pleased",
    "satisfied",
    "content",
    "cheerful",
    "optimistic",
    "positive",
    "upbeat",
];

/// Words that push sentiment down
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "sad",
    "hate",
    "horrible",
    "angry",
    "frustrated",
    "annoyed",
    "upset",
    "depressed",
    "miserable",
    "disappointed",
    "worried",
    "anxious",
    "stressed",
    "furious",
    "disgusted",
    "appalled",
    "devastated",
    "heartbroken",
    "gloomy",
    "pessimistic",
    "negative",
    "bitter",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

static POSITIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());

static NEGATIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Lexicon membership helpers.
///
/// Lookups expect words that already went through [`super::tokenizer::tokenize`]
/// (lower-cased, punctuation stripped).
pub struct Lexicon;

impl Lexicon {
    pub fn is_stopword(word: &str) -> bool {
        STOPWORD_SET.contains(word)
    }

    pub fn is_positive(word: &str) -> bool {
        POSITIVE_SET.contains(word)
    }

    pub fn is_negative(word: &str) -> bool {
        NEGATIVE_SET.contains(word)
    }

    /// Number of entries in each list: (stopwords, positive, negative)
    #[cfg(test)]
    pub fn sizes() -> (usize, usize, usize) {
        (STOPWORD_SET.len(), POSITIVE_SET.len(), NEGATIVE_SET.len())
    }
}
