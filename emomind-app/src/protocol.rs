// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Client-server protocol for the EmoMind app.
//!
//! All messages are JSON-serialized over WebSocket.

use emomind_core::Mood;
use serde::{Deserialize, Serialize};

// ─── Client → Server ────────────────────────────────

/// Messages sent from the browser client to the server.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMsg {
    /// Client signals it is ready to receive the initial graph.
    Ready,
    /// One utterance of transcribed speech (or typed text).
    Utterance { text: String },
    /// Reset the mood machine back to Neutral.
    Reset,
}

// ─── Server → Client ────────────────────────────────

/// Messages sent from the server to the browser client.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ServerMsg {
    /// Initial graph state sent after the client says Ready.
    Init {
        states: Vec<Mood>,
        current: Mood,
        dot: String,
    },
    /// Result of one resolve cycle.
    MoodUpdate {
        mood: Mood,
        mood_color: String,
        emotion_summary: String,
        sentiment_summary: String,
        dot: String,
        cycle: u64,
    },
}
