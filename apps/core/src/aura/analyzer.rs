//! Aura Analyzer - Main orchestrator for the aura module.
//!
//! Runs tokenization, keyword selection, polarity scoring, emotion
//! classification and energy estimation, then assembles the
//! [`AnalysisResult`] sent to the client.
//!
//! Everything except the energy jitter is deterministic. [`AuraAnalyzer::score`]
//! exposes that deterministic part on its own.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::emotion::{self, Emotion};
use super::energy::{self, EnergyJitter, ThreadRngJitter};
use super::keywords::KeywordExtractor;
use super::polarity::PolarityCounts;
use super::tokenizer;
use crate::models::AnalysisResult;

/// Confidence reported for every lexicon-based result
pub const LEXICON_CONFIDENCE: f64 = 0.8;

/// Deterministic scoring output, before jitter and rounding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuraScore {
    /// Normalized words
    pub words: Vec<String>,
    /// Selected keywords
    pub keywords: Vec<String>,
    /// Polarity hit counts
    pub polarity: PolarityCounts,
    /// Unrounded sentiment
    pub sentiment: f64,
    /// Emotion for the unrounded sentiment
    pub emotion: Emotion,
    /// Energy before jitter
    pub base_energy: f64,
}

/// Main analyzer shared by all requests
#[derive(Clone)]
pub struct AuraAnalyzer {
    keyword_extractor: Arc<KeywordExtractor>,
    jitter: Arc<dyn EnergyJitter>,
}

impl Default for AuraAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl AuraAnalyzer {
    /// Analyzer with thread-local random jitter
    pub fn new() -> Self {
        Self::with_jitter(Arc::new(ThreadRngJitter))
    }

    /// Analyzer with a custom jitter source
    pub fn with_jitter(jitter: Arc<dyn EnergyJitter>) -> Self {
        Self {
            keyword_extractor: Arc::new(KeywordExtractor::new()),
            jitter,
        }
    }

    /// Compute the deterministic part of the analysis
    pub fn score(&self, text: &str) -> AuraScore {
        let words = tokenizer::tokenize(text);
        let keywords = self.keyword_extractor.extract(&words);
        let polarity = PolarityCounts::count(&words);
        let sentiment = polarity.sentiment();
        let emotion = emotion::classify(sentiment);
        let base_energy = energy::base_energy(words.len(), text);

        AuraScore {
            words,
            keywords,
            polarity,
            sentiment,
            emotion,
            base_energy,
        }
    }

    /// Analyze text. Total over all inputs, including the empty string.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();
        let score = self.score(text);
        let energy = energy::jittered(score.base_energy, self.jitter.as_ref());

        debug!(
            words = score.words.len(),
            positive = score.polarity.positive,
            negative = score.polarity.negative,
            sentiment = score.sentiment,
            emotion = %score.emotion,
            energy,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Scored text"
        );

        AnalysisResult {
            sentiment: round2(score.sentiment),
            confidence: LEXICON_CONFIDENCE,
            keywords: score.keywords,
            emotion: score.emotion,
            energy: round2(energy),
            color_palette: score.emotion.palette_vec(),
        }
    }
}

/// Round to two decimal places, ties to even on the exact binary value.
///
/// `{:.2}` formatting rounds the exact decimal expansion, so 0.125 becomes
/// 0.12 and 0.625 becomes 0.62.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
