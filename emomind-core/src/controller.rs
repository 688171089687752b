// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! MoodController — resolves classifier output into the next mood state.
//!
//! The machine is deliberately memoryless: each resolve cycle is a pure
//! function of the latest emotion and sentiment score maps, with no
//! hysteresis, smoothing, or minimum dwell time. The transition topology
//! is the complete graph over the 7 moods — modeling it as a state
//! machine makes "current mood" an explicit, inspectable value, not a
//! reachability constraint.

use crate::mood::Mood;
use crate::score::ScoreMap;

/// Drives the visible mood of the agent from per-utterance classifier
/// scores. Single-threaded by design; callers invoking `resolve` from
/// multiple tasks must provide their own synchronization.
#[derive(Debug, Clone)]
pub struct MoodController {
    state: Mood,
    /// Per-mood momentum accumulator. Not consulted by `resolve` yet;
    /// kept for intensity-weighted transitions.
    pub momentum: [f32; 7],
}

impl MoodController {
    /// A fresh controller starts at `Neutral`.
    pub fn new() -> Self {
        Self {
            state: Mood::Neutral,
            momentum: [0.0; 7],
        }
    }

    /// The current mood. No side effects.
    pub fn state(&self) -> Mood {
        self.state
    }

    /// The full mood set in canonical order, for rendering every node of
    /// the state graph. Identical across calls.
    pub fn all_states(&self) -> [Mood; 7] {
        Mood::ALL
    }

    /// Every ordered (source, target) pair over the mood set — 49 edges
    /// including self-loops. Any mood may transition to any mood in one
    /// resolve cycle.
    pub fn transition_edges(&self) -> Vec<(Mood, Mood)> {
        let mut edges = Vec::with_capacity(Mood::ALL.len() * Mood::ALL.len());
        for s in Mood::ALL {
            for t in Mood::ALL {
                edges.push((s, t));
            }
        }
        edges
    }

    /// Resolve one cycle of classifier output into the next mood.
    ///
    /// The emotion signal takes priority: the top-scoring emotion label,
    /// if it normalizes to a known mood, decides the transition outright.
    /// Otherwise the top sentiment label is consulted (`POSITIVE` →
    /// `Happy`, `NEGATIVE` → `Sad`, anything else → `Neutral`). Two empty
    /// maps resolve to `Neutral`. Total — never fails, validates nothing.
    pub fn resolve(&mut self, emotion: &ScoreMap, sentiment: &ScoreMap) -> Mood {
        let from_emotion = emotion
            .top()
            .and_then(|(label, _)| Mood::from_emotion_label(label));

        let target = match from_emotion {
            Some(mood) => mood,
            None => match sentiment.top() {
                Some((label, _)) => Mood::from_sentiment_label(label),
                None => Mood::Neutral,
            },
        };

        self.state = target;
        target
    }
}

impl Default for MoodController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, f32)]) -> ScoreMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_initial_state_neutral() {
        assert_eq!(MoodController::new().state(), Mood::Neutral);
    }

    #[test]
    fn test_both_empty_resolves_neutral() {
        let mut fsm = MoodController::new();
        assert_eq!(fsm.resolve(&ScoreMap::new(), &ScoreMap::new()), Mood::Neutral);
        assert_eq!(fsm.state(), Mood::Neutral);
    }

    #[test]
    fn test_emotion_wins() {
        let mut fsm = MoodController::new();
        let mood = fsm.resolve(&scores(&[("joy", 0.9), ("anger", 0.05)]), &ScoreMap::new());
        assert_eq!(mood, Mood::Happy);
    }

    #[test]
    fn test_emotion_priority_over_sentiment() {
        let mut fsm = MoodController::new();
        // Sentiment says positive; the emotion signal still decides.
        let mood = fsm.resolve(
            &scores(&[("sadness", 0.8)]),
            &scores(&[("POSITIVE", 0.99)]),
        );
        assert_eq!(mood, Mood::Sad);
    }

    #[test]
    fn test_sentiment_fallback_when_emotion_empty() {
        let mut fsm = MoodController::new();
        assert_eq!(
            fsm.resolve(&ScoreMap::new(), &scores(&[("NEGATIVE", 0.7)])),
            Mood::Sad
        );
        assert_eq!(
            fsm.resolve(&ScoreMap::new(), &scores(&[("POSITIVE", 0.7)])),
            Mood::Happy
        );
        assert_eq!(
            fsm.resolve(&ScoreMap::new(), &scores(&[("NEUTRAL", 0.7)])),
            Mood::Neutral
        );
    }

    #[test]
    fn test_sentiment_fallback_when_emotion_unmapped() {
        let mut fsm = MoodController::new();
        let mood = fsm.resolve(
            &scores(&[("unknown_label", 1.0)]),
            &scores(&[("POSITIVE", 0.3)]),
        );
        assert_eq!(mood, Mood::Happy);
    }

    #[test]
    fn test_unmapped_emotion_empty_sentiment() {
        let mut fsm = MoodController::new();
        let mood = fsm.resolve(&scores(&[("confusion", 1.0)]), &ScoreMap::new());
        assert_eq!(mood, Mood::Neutral);
    }

    #[test]
    fn test_state_tracks_last_resolve() {
        let mut fsm = MoodController::new();
        fsm.resolve(&scores(&[("fear", 0.6)]), &ScoreMap::new());
        assert_eq!(fsm.state(), Mood::Fearful);
        fsm.resolve(&scores(&[("trust", 0.6)]), &ScoreMap::new());
        assert_eq!(fsm.state(), Mood::Curious);
        // No smoothing: result never depends on the prior state.
        fsm.resolve(&ScoreMap::new(), &ScoreMap::new());
        assert_eq!(fsm.state(), Mood::Neutral);
    }

    #[test]
    fn test_all_states_stable_order() {
        let fsm = MoodController::new();
        let a = fsm.all_states();
        let b = fsm.all_states();
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
        assert_eq!(a[0], Mood::Neutral);
    }

    #[test]
    fn test_transition_edges_complete_graph() {
        let fsm = MoodController::new();
        let edges = fsm.transition_edges();
        assert_eq!(edges.len(), 49);
        for s in Mood::ALL {
            assert!(edges.contains(&(s, s)), "missing self-loop for {s}");
            for t in Mood::ALL {
                assert!(edges.contains(&(s, t)));
            }
        }
    }

    #[test]
    fn test_momentum_untouched_by_resolve() {
        let mut fsm = MoodController::new();
        fsm.resolve(&scores(&[("joy", 0.9)]), &ScoreMap::new());
        assert_eq!(fsm.momentum, [0.0; 7]);
    }
}
