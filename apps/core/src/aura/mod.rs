//! # Aura Module
//!
//! Lexicon-based mood scoring for the aura visualizer.
//! No ML model: word lists, a threshold ladder and a little randomness.
//!
//! ## Components
//! - `tokenizer`: whitespace split, lower-casing, edge punctuation stripping
//! - `lexicon`: static stopword / positive / negative word lists
//! - `keywords`: first-N non-stopword selection
//! - `polarity`: positive vs negative hit counting
//! - `emotion`: sentiment threshold ladder and color palettes
//! - `energy`: length/emphasis energy with injectable jitter
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod emotion;
pub mod energy;
pub mod keywords;
pub mod lexicon;
pub mod polarity;
pub mod tokenizer;

pub use analyzer::AuraAnalyzer;
pub use emotion::Emotion;
pub use energy::SeededJitter;
