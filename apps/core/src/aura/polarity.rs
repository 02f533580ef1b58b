//! Lexicon-based polarity scoring.

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;

/// Polarity hit counts for a word sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityCounts {
    /// Occurrences of positive words (repeats counted)
    pub positive: usize,
    /// Occurrences of negative words (repeats counted)
    pub negative: usize,
}

impl PolarityCounts {
    /// Count polarity hits over normalized words
    pub fn count(words: &[String]) -> Self {
        words.iter().fold(Self::default(), |mut counts, word| {
            if Lexicon::is_positive(word) {
                counts.positive += 1;
            } else if Lexicon::is_negative(word) {
                counts.negative += 1;
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Net polarity in [-1.0, 1.0]. Zero when no polarity word was seen.
    pub fn sentiment(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        (self.positive as f64 - self.negative as f64) / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::tokenizer::tokenize;

    #[test]
    fn test_no_hits_is_zero() {
        let counts = PolarityCounts::count(&tokenize("just some plain words"));
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.sentiment(), 0.0);
    }

    #[test]
    fn test_repeats_are_counted() {
        let counts = PolarityCounts::count(&tokenize("good good good bad"));
        assert_eq!(counts, PolarityCounts { positive: 3, negative: 1 });
        assert_eq!(counts.sentiment(), 0.5);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(PolarityCounts::count(&tokenize("love it, awesome")).sentiment(), 1.0);
        assert_eq!(PolarityCounts::count(&tokenize("sad and gloomy")).sentiment(), -1.0);
        assert_eq!(PolarityCounts::count(&tokenize("great but terrible")).sentiment(), 0.0);
    }
}
