//! Configuration for the lexicon scoring pipeline.

use serde::{Deserialize, Serialize};

/// Lexicon scorer parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Half-width of the neutral sentiment band. Mean valence within
    /// ±band classifies as NEUTRAL.
    pub neutral_band: f32,
    /// Emotion entries scoring below this are dropped from the output
    /// map. 0.0 keeps everything.
    pub min_confidence: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            neutral_band: 0.05,
            min_confidence: 0.0,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration, returning any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.neutral_band < 0.0 || self.neutral_band >= 1.0 {
            issues.push(format!(
                "neutral_band {} out of range [0, 1)",
                self.neutral_band
            ));
        }
        if self.min_confidence < 0.0 || self.min_confidence > 1.0 {
            issues.push(format!(
                "min_confidence {} out of range [0, 1]",
                self.min_confidence
            ));
        }
        issues
    }
}
