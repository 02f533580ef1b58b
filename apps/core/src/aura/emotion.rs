//! Emotion classification.
//!
//! Maps a sentiment value onto one of five emotions through an ordered rule
//! ladder. Rules are checked top to bottom and the first match wins, so the
//! boundary values (0.4, 0.1, -0.1, -0.4) resolve by rule order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion label sent to the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Surprise,
    Sadness,
    Anger,
    Neutral,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Surprise => "surprise",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Neutral => "neutral",
        }
    }

    /// The five colors the client paints this emotion with
    pub fn palette(&self) -> &'static [&'static str; 5] {
        match self {
            Emotion::Joy => &["#FFD700", "#FF69B4", "#00FF7F", "#FFA500", "#FF1493"],
            Emotion::Surprise => &["#87CEEB", "#98FB98", "#F0E68C", "#DDA0DD", "#FFB6C1"],
            Emotion::Sadness => &["#4169E1", "#483D8B", "#2F4F4F", "#191970", "#000080"],
            Emotion::Anger => &["#DC143C", "#B22222", "#8B0000", "#FF4500", "#FF6347"],
            Emotion::Neutral => &["#4A90E2", "#50C878", "#FFB347", "#9370DB", "#20B2AA"],
        }
    }

    /// Owned copy of [`Emotion::palette`] for serialization
    pub fn palette_vec(&self) -> Vec<String> {
        self.palette().iter().map(|c| c.to_string()).collect()
    }
}

/// One rung of the ladder
struct EmotionRule {
    emotion: Emotion,
    matches: fn(f64) -> bool,
}

/// Evaluated in order; anything that falls through is neutral
const LADDER: &[EmotionRule] = &[
    EmotionRule {
        emotion: Emotion::Joy,
        matches: |s| s > 0.4,
    },
    EmotionRule {
        emotion: Emotion::Surprise,
        matches: |s| s > 0.1,
    },
    EmotionRule {
        emotion: Emotion::Sadness,
        matches: |s| s < -0.4,
    },
    EmotionRule {
        emotion: Emotion::Anger,
        matches: |s| s < -0.1,
    },
];

/// Classify a sentiment value
pub fn classify(sentiment: f64) -> Emotion {
    LADDER
        .iter()
        .find(|rule| (rule.matches)(sentiment))
        .map(|rule| rule.emotion)
        .unwrap_or(Emotion::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_boundaries() {
        assert_eq!(classify(1.0), Emotion::Joy);
        assert_eq!(classify(0.41), Emotion::Joy);
        assert_eq!(classify(0.4), Emotion::Surprise);
        assert_eq!(classify(0.11), Emotion::Surprise);
        assert_eq!(classify(0.1), Emotion::Neutral);
        assert_eq!(classify(0.0), Emotion::Neutral);
        assert_eq!(classify(-0.1), Emotion::Neutral);
        assert_eq!(classify(-0.11), Emotion::Anger);
        assert_eq!(classify(-0.4), Emotion::Anger);
        assert_eq!(classify(-0.41), Emotion::Sadness);
        assert_eq!(classify(-1.0), Emotion::Sadness);
    }

    #[test]
    fn test_palettes_are_distinct_hex() {
        let all = [
            Emotion::Joy,
            Emotion::Surprise,
            Emotion::Sadness,
            Emotion::Anger,
            Emotion::Neutral,
        ];
        for emotion in all {
            for color in emotion.palette() {
                assert_eq!(color.len(), 7);
                assert!(color.starts_with('#'));
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
        assert_ne!(Emotion::Joy.palette(), Emotion::Neutral.palette());
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&Emotion::Sadness).unwrap(), "\"sadness\"");
        assert_eq!(Emotion::Surprise.to_string(), "surprise");
    }
}
