//! Boundary contracts with external collaborators.
//!
//! Speech capture and transcription live outside this repo; the server
//! only depends on the `Transcriber` seam. Implementations absorb their
//! own failures: "no speech detected" and "microphone unavailable" both
//! come back as an empty string, never as an error.

use std::collections::VecDeque;

/// Converts a recording request into transcribed text.
pub trait Transcriber {
    /// Record for `duration_secs` at `sample_rate_hz` and transcribe.
    /// Returns the empty string on failure or silence.
    fn transcribe(&mut self, duration_secs: u32, sample_rate_hz: u32) -> String;
}

/// No-op transcriber for hosts without a speech pipeline. Every request
/// comes back empty, which downstream resolves to Neutral.
#[derive(Debug, Default)]
pub struct NullTranscriber;

impl Transcriber for NullTranscriber {
    fn transcribe(&mut self, _duration_secs: u32, _sample_rate_hz: u32) -> String {
        String::new()
    }
}

/// Replays a fixed script of utterances, then returns empty strings.
/// Used by the demo script mode and by tests.
#[derive(Debug, Default)]
pub struct ScriptedTranscriber {
    lines: VecDeque<String>,
}

impl ScriptedTranscriber {
    pub fn new(lines: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Transcriber for ScriptedTranscriber {
    fn transcribe(&mut self, _duration_secs: u32, _sample_rate_hz: u32) -> String {
        self.lines.pop_front().unwrap_or_default()
    }
}
