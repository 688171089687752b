//! The closed mood vocabulary — 7 discrete states the agent can display,
//! plus the static label-normalization tables that map raw classifier
//! labels onto them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete mood states. The set is closed; exactly one is current at any
/// time and the machine starts at `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
    Fearful,
    Curious,
}

impl Mood {
    /// All moods in their canonical display order. Callers rendering the
    /// state graph rely on this order being stable across calls.
    pub const ALL: [Mood; 7] = [
        Self::Neutral,
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Surprised,
        Self::Fearful,
        Self::Curious,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Surprised => "Surprised",
            Self::Fearful => "Fearful",
            Self::Curious => "Curious",
        }
    }

    /// Position in `ALL`, usable as an index into per-mood arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Neutral => 0,
            Self::Happy => 1,
            Self::Sad => 2,
            Self::Angry => 3,
            Self::Surprised => 4,
            Self::Fearful => 5,
            Self::Curious => 6,
        }
    }

    /// Whether this mood is generally positive.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Happy | Self::Curious)
    }

    /// Whether this mood is generally negative.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Sad | Self::Angry | Self::Fearful)
    }

    /// Normalize a raw emotion label to a mood.
    ///
    /// Labels are matched case-insensitively against the fixed variant
    /// table (different upstream models emit "joy", "happy", "happiness",
    /// and so on for the same mood). Unknown labels return `None` so the
    /// caller can fall back to the sentiment signal.
    pub fn from_emotion_label(label: &str) -> Option<Mood> {
        let mood = match label.to_lowercase().as_str() {
            "joy" | "happy" | "happiness" => Self::Happy,
            "sadness" | "sad" => Self::Sad,
            "anger" | "angry" | "disgust" => Self::Angry,
            "surprise" | "surprised" => Self::Surprised,
            "fear" | "fearful" => Self::Fearful,
            "neutral" => Self::Neutral,
            "trust" | "anticipation" | "curiosity" | "curious" => Self::Curious,
            _ => return None,
        };
        Some(mood)
    }

    /// Normalize a raw sentiment label to a mood.
    ///
    /// Sentiment is a coarse 3-way signal: `POSITIVE` → `Happy`,
    /// `NEGATIVE` → `Sad`, anything else (including the empty string)
    /// → `Neutral`. Matching is case-insensitive; this is total.
    pub fn from_sentiment_label(label: &str) -> Mood {
        match label.to_uppercase().as_str() {
            "POSITIVE" => Self::Happy,
            "NEGATIVE" => Self::Sad,
            _ => Self::Neutral,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_indices() {
        for (i, m) in Mood::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn test_emotion_label_variants() {
        assert_eq!(Mood::from_emotion_label("joy"), Some(Mood::Happy));
        assert_eq!(Mood::from_emotion_label("happiness"), Some(Mood::Happy));
        assert_eq!(Mood::from_emotion_label("sadness"), Some(Mood::Sad));
        assert_eq!(Mood::from_emotion_label("disgust"), Some(Mood::Angry));
        assert_eq!(Mood::from_emotion_label("surprise"), Some(Mood::Surprised));
        assert_eq!(Mood::from_emotion_label("fear"), Some(Mood::Fearful));
        assert_eq!(Mood::from_emotion_label("neutral"), Some(Mood::Neutral));
        assert_eq!(Mood::from_emotion_label("trust"), Some(Mood::Curious));
        assert_eq!(Mood::from_emotion_label("anticipation"), Some(Mood::Curious));
    }

    #[test]
    fn test_emotion_label_case_insensitive() {
        assert_eq!(Mood::from_emotion_label("Joy"), Some(Mood::Happy));
        assert_eq!(Mood::from_emotion_label("ANGER"), Some(Mood::Angry));
        assert_eq!(Mood::from_emotion_label("FeArFuL"), Some(Mood::Fearful));
    }

    #[test]
    fn test_emotion_label_unknown() {
        assert_eq!(Mood::from_emotion_label("confusion"), None);
        assert_eq!(Mood::from_emotion_label(""), None);
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Mood::from_sentiment_label("POSITIVE"), Mood::Happy);
        assert_eq!(Mood::from_sentiment_label("positive"), Mood::Happy);
        assert_eq!(Mood::from_sentiment_label("NEGATIVE"), Mood::Sad);
        assert_eq!(Mood::from_sentiment_label("NEUTRAL"), Mood::Neutral);
        assert_eq!(Mood::from_sentiment_label("mixed"), Mood::Neutral);
        assert_eq!(Mood::from_sentiment_label(""), Mood::Neutral);
    }

    #[test]
    fn test_polarity_partition() {
        for m in Mood::ALL {
            assert!(!(m.is_positive() && m.is_negative()));
        }
        assert!(Mood::Happy.is_positive());
        assert!(Mood::Sad.is_negative());
        assert!(!Mood::Neutral.is_positive());
        assert!(!Mood::Neutral.is_negative());
    }

    #[test]
    fn test_display_matches_name() {
        for m in Mood::ALL {
            assert_eq!(m.to_string(), m.name());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Mood::Curious).unwrap();
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mood::Curious);
    }
}
