//! The scorer seam between the mood controller and whatever produces
//! classification output.
//!
//! Implementations must be total: internal failures are absorbed and
//! surface as empty score maps, never as errors. The controller performs
//! no error handling of its own and two empty maps resolve to Neutral,
//! so "scorer broke" degrades to "mood goes neutral."

use emomind_core::ScoreMap;
use serde::Serialize;

/// One scoring pass over an utterance: an emotion distribution and a
/// sentiment distribution, either possibly empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Prediction {
    pub emotion: ScoreMap,
    pub sentiment: ScoreMap,
}

/// Produces emotion and sentiment score maps for an input string.
pub trait Scorer {
    /// Score one utterance. Must not fail; empty input yields empty maps.
    fn predict(&self, text: &str) -> Prediction;
}
