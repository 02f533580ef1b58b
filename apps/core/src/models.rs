use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::aura::Emotion;

/// Tag used when the client does not name a provider.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Body of `POST /process_text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The transcript snippet to score. May be empty.
    pub text: String,
    /// Which external model the client would like to use ("openai", "anthropic").
    /// Accepted for compatibility with the client; scoring is local and ignores it.
    #[serde(default = "default_provider")]
    pub provider: String,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

/// Mood summary returned to the visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalysisResult {
    /// Net polarity, -1.0 (negative) to 1.0 (positive), two decimals.
    #[validate(range(min = -1.0, max = 1.0))]
    pub sentiment: f64,
    /// Fixed confidence of the lexicon scorer.
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    /// Up to five non-stopwords in text order.
    #[validate(length(max = 5))]
    pub keywords: Vec<String>,
    /// Emotion picked from the sentiment.
    pub emotion: Emotion,
    /// Animation intensity, 0.1 to 1.0, two decimals.
    #[validate(range(min = 0.1, max = 1.0))]
    pub energy: f64,
    /// Five hex colors for the emotion.
    #[validate(length(equal = 5))]
    pub color_palette: Vec<String>,
}
