//! Label→confidence mappings produced by classifiers.
//!
//! A `ScoreMap` preserves insertion order, which gives the controller a
//! deterministic tie-break when two labels share the maximum score.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping from classifier label to confidence.
///
/// Confidences are semantically in [0, 1] but nothing here assumes bounds
/// beyond ordinary numeric comparison. Duplicate keys (before or after
/// case normalization) are allowed; only the top entry is ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap {
    entries: Vec<(String, f32)>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a label/score pair. Earlier insertions win max-score ties.
    pub fn insert(&mut self, label: impl Into<String>, score: f32) {
        self.entries.push((label.into(), score));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), *s))
    }

    /// The maximum-scoring entry, or `None` when empty.
    ///
    /// Ties are broken by insertion order: the first entry with the
    /// greatest score wins. NaN scores never displace an earlier entry.
    pub fn top(&self) -> Option<(&str, f32)> {
        let mut best: Option<(&str, f32)> = None;
        for (label, score) in self.iter() {
            match best {
                None => best = Some((label, score)),
                Some((_, b)) if score > b => best = Some((label, score)),
                _ => {}
            }
        }
        best
    }

    /// Human-readable summary, sorted by score descending:
    /// `"joy (0.90), anger (0.05)"`. Empty maps render as `"{}"`.
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "{}".into();
        }
        let mut sorted: Vec<(&str, f32)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let mut out = String::new();
        for (i, (label, score)) in sorted.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{label} ({score:.2})");
        }
        out
    }
}

impl FromIterator<(String, f32)> for ScoreMap {
    fn from_iter<T: IntoIterator<Item = (String, f32)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f32)> for ScoreMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, f32)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(l, s)| (l.to_string(), s)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_top() {
        assert_eq!(ScoreMap::new().top(), None);
    }

    #[test]
    fn test_top_single() {
        let mut m = ScoreMap::new();
        m.insert("joy", 0.9);
        assert_eq!(m.top(), Some(("joy", 0.9)));
    }

    #[test]
    fn test_top_picks_max() {
        let m: ScoreMap = [("sadness", 0.1), ("joy", 0.7), ("anger", 0.2)]
            .into_iter()
            .collect();
        assert_eq!(m.top().unwrap().0, "joy");
    }

    #[test]
    fn test_top_tie_first_inserted_wins() {
        let m: ScoreMap = [("surprise", 0.5), ("fear", 0.5)].into_iter().collect();
        assert_eq!(m.top().unwrap().0, "surprise");
    }

    #[test]
    fn test_duplicate_keys_allowed() {
        let m: ScoreMap = [("Happy", 0.4), ("happy", 0.6)].into_iter().collect();
        assert_eq!(m.top().unwrap().0, "happy");
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_summary_sorted_desc() {
        let m: ScoreMap = [("anger", 0.05), ("joy", 0.9)].into_iter().collect();
        assert_eq!(m.summary(), "joy (0.90), anger (0.05)");
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(ScoreMap::new().summary(), "{}");
    }

    #[test]
    fn test_serde_roundtrip() {
        let m: ScoreMap = [("joy", 0.9)].into_iter().collect();
        let json = serde_json::to_string(&m).unwrap();
        let back: ScoreMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
