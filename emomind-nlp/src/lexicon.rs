//! Keyword-lexicon fallback scorer.
//!
//! The last rung of the scoring fallback chain: when no transformer or
//! remote model is available, a small valence-tagged keyword lexicon
//! still produces usable emotion and sentiment distributions. Emotion
//! scores come from hit counts per label; sentiment comes from the mean
//! valence of all hits, classified POSITIVE/NEGATIVE/NEUTRAL around a
//! small neutral band with |mean| as the confidence.

use emomind_core::ScoreMap;

use crate::config::PipelineConfig;
use crate::scorer::{Prediction, Scorer};

/// (keyword, emotion label, valence in [-1, 1])
///
/// Labels use the raw classifier vocabulary (joy/sadness/anger/fear/
/// surprise/trust/...) rather than mood names, so the output looks like
/// any other scorer's.
const LEXICON: &[(&str, &str, f32)] = &[
    // joy
    ("happy", "joy", 0.8),
    ("glad", "joy", 0.6),
    ("great", "joy", 0.6),
    ("love", "joy", 0.9),
    ("wonderful", "joy", 0.8),
    ("awesome", "joy", 0.8),
    ("excellent", "joy", 0.7),
    ("fun", "joy", 0.6),
    ("enjoy", "joy", 0.6),
    ("delighted", "joy", 0.9),
    // sadness
    ("sad", "sadness", -0.7),
    ("unhappy", "sadness", -0.6),
    ("miserable", "sadness", -0.9),
    ("cry", "sadness", -0.7),
    ("lonely", "sadness", -0.6),
    ("depressed", "sadness", -0.9),
    ("grief", "sadness", -0.8),
    ("disappointed", "sadness", -0.6),
    // anger
    ("angry", "anger", -0.8),
    ("furious", "anger", -0.9),
    ("hate", "anger", -0.9),
    ("annoyed", "anger", -0.5),
    ("mad", "anger", -0.7),
    ("disgusting", "disgust", -0.7),
    ("awful", "disgust", -0.7),
    ("terrible", "disgust", -0.8),
    // fear
    ("afraid", "fear", -0.7),
    ("scared", "fear", -0.7),
    ("terrified", "fear", -0.9),
    ("worried", "fear", -0.5),
    ("anxious", "fear", -0.6),
    ("nervous", "fear", -0.5),
    // surprise
    ("surprised", "surprise", 0.2),
    ("shocked", "surprise", -0.2),
    ("unexpected", "surprise", 0.0),
    ("wow", "surprise", 0.3),
    ("amazing", "surprise", 0.6),
    ("unbelievable", "surprise", 0.1),
    // trust / anticipation
    ("curious", "curiosity", 0.3),
    ("interesting", "curiosity", 0.4),
    ("wonder", "curiosity", 0.2),
    ("trust", "trust", 0.5),
    ("hope", "anticipation", 0.4),
    ("excited", "anticipation", 0.7),
    ("eager", "anticipation", 0.5),
    ("okay", "neutral", 0.0),
    ("fine", "neutral", 0.1),
];

/// Lexicon-based scorer. Total by construction: no lexicon hits means
/// empty maps, which the controller resolves to Neutral.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    config: PipelineConfig,
}

impl LexiconScorer {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Scorer for LexiconScorer {
    fn predict(&self, text: &str) -> Prediction {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Prediction::default();
        }

        // Hit counting per emotion label + running valence sum.
        let mut hits: Vec<(&str, u32)> = Vec::new();
        let mut valence_sum = 0.0f32;
        let mut hit_count = 0u32;

        for token in &tokens {
            for (word, label, valence) in LEXICON {
                if token.as_str() == *word {
                    match hits.iter_mut().find(|(l, _)| l == label) {
                        Some((_, n)) => *n += 1,
                        None => hits.push((*label, 1)),
                    }
                    valence_sum += valence;
                    hit_count += 1;
                }
            }
        }

        if hit_count == 0 {
            return Prediction::default();
        }

        let mut emotion = ScoreMap::new();
        for (label, n) in &hits {
            let score = *n as f32 / hit_count as f32;
            if score >= self.config.min_confidence {
                emotion.insert(*label, score);
            }
        }

        let compound = valence_sum / hit_count as f32;
        let sentiment_label = if compound >= self.config.neutral_band {
            "POSITIVE"
        } else if compound <= -self.config.neutral_band {
            "NEGATIVE"
        } else {
            "NEUTRAL"
        };
        let mut sentiment = ScoreMap::new();
        sentiment.insert(sentiment_label, compound.abs());

        Prediction { emotion, sentiment }
    }
}

/// Lower-cased alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
