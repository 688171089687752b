// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! EmoMind Server
//!
//! Axum-based HTTP + WebSocket server that:
//! 1. Serves a self-contained mood view page
//! 2. Accepts utterance text over WebSocket
//! 3. Scores each utterance (emotion + sentiment) with the configured scorer
//! 4. Resolves the scores through the mood state machine
//! 5. Pushes the new mood and DOT graph back to the client

mod collaborators;
mod page;
mod protocol;

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::WebSocketUpgrade;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use emomind_core::MoodController;
use emomind_nlp::{LexiconScorer, Scorer};
use emomind_viz::{color, render_mood_graph};

use collaborators::{NullTranscriber, ScriptedTranscriber, Transcriber};
use protocol::{ClientMsg, ServerMsg};

/// Recording request handed to the transcriber collaborator.
const RECORD_SECONDS: u32 = 3;
const SAMPLE_RATE_HZ: u32 = 16_000;

/// Shared server state behind a mutex. The controller itself defines no
/// locking; this mutex is the caller-side synchronization it requires.
struct AppState {
    fsm: MoodController,
    scorer: LexiconScorer,
    transcriber: Box<dyn Transcriber + Send>,
    cycle: u64,
}

impl AppState {
    fn new(transcriber: Box<dyn Transcriber + Send>) -> Self {
        Self {
            fsm: MoodController::new(),
            scorer: LexiconScorer::default(),
            transcriber,
            cycle: 0,
        }
    }

    /// One full resolve cycle over a piece of text.
    fn run_cycle(&mut self, text: &str) -> ServerMsg {
        let prediction = self.scorer.predict(text);
        let mood = self.fsm.resolve(&prediction.emotion, &prediction.sentiment);
        self.cycle += 1;
        tracing::info!(cycle = self.cycle, %mood, "resolved utterance");
        ServerMsg::MoodUpdate {
            mood,
            mood_color: color::mood_hex(mood),
            emotion_summary: prediction.emotion.summary(),
            sentiment_summary: prediction.sentiment.summary(),
            dot: render_mood_graph(&self.fsm),
            cycle: self.cycle,
        }
    }

    fn init_msg(&self) -> ServerMsg {
        ServerMsg::Init {
            states: self.fsm.all_states().to_vec(),
            current: self.fsm.state(),
            dot: render_mood_graph(&self.fsm),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let port = std::env::var("EMOMIND_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    // EMOMIND_SCRIPT points at a file of utterances, one per line, that
    // stand in for a live speech pipeline. Without it the transcriber is
    // a no-op and /cycle resolves to Neutral.
    let transcriber: Box<dyn Transcriber + Send> = match std::env::var("EMOMIND_SCRIPT") {
        Ok(path) => {
            let script = std::fs::read_to_string(&path)?;
            let lines: Vec<String> = script.lines().map(str::to_string).collect();
            tracing::info!(%path, utterances = lines.len(), "loaded transcript script");
            Box::new(ScriptedTranscriber::new(lines))
        }
        Err(_) => Box::new(NullTranscriber),
    };

    let state = Arc::new(Mutex::new(AppState::new(transcriber)));

    let app = Router::new()
        .route("/", get(serve_page))
        .route("/status", get({
            let state = Arc::clone(&state);
            move || serve_status(state)
        }))
        .route("/cycle", post({
            let state = Arc::clone(&state);
            move || run_transcribe_cycle(state)
        }))
        .route("/ws", get({
            let state = Arc::clone(&state);
            move |ws| ws_handler(ws, state)
        }))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("EmoMind running on http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_page() -> Html<String> {
    Html(page::build_page_html())
}

async fn serve_status(state: Arc<Mutex<AppState>>) -> Json<serde_json::Value> {
    let s = state.lock().await;
    Json(serde_json::json!({
        "mood": s.fsm.state(),
        "cycle": s.cycle,
        "states": s.fsm.all_states().len(),
        "edges": s.fsm.transition_edges().len(),
    }))
}

/// Drive one record → transcribe → score → resolve cycle through the
/// transcriber collaborator instead of client-supplied text.
async fn run_transcribe_cycle(state: Arc<Mutex<AppState>>) -> Json<serde_json::Value> {
    let mut s = state.lock().await;
    let text = s.transcriber.transcribe(RECORD_SECONDS, SAMPLE_RATE_HZ);
    let msg = s.run_cycle(&text);
    Json(serde_json::to_value(&msg).unwrap_or_default())
}

async fn ws_handler(ws: WebSocketUpgrade, state: Arc<Mutex<AppState>>) -> axum::response::Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<Mutex<AppState>>) {
    while let Some(Ok(msg)) = socket.recv().await {
        let reply = match msg {
            Message::Text(text) => match serde_json::from_str::<ClientMsg>(&text) {
                Ok(ClientMsg::Ready) => {
                    let s = state.lock().await;
                    Some(s.init_msg())
                }
                Ok(ClientMsg::Utterance { text: utterance }) => {
                    let mut s = state.lock().await;
                    Some(s.run_cycle(&utterance))
                }
                Ok(ClientMsg::Reset) => {
                    let mut s = state.lock().await;
                    s.fsm = MoodController::new();
                    s.cycle = 0;
                    tracing::info!("mood machine reset");
                    Some(s.init_msg())
                }
                Err(e) => {
                    tracing::warn!("unparseable client message: {e}");
                    None
                }
            },
            Message::Close(_) => return,
            _ => None,
        };

        if let Some(reply) = reply {
            if let Ok(json) = serde_json::to_string(&reply) {
                if socket.send(Message::Text(json.into())).await.is_err() {
                    return;
                }
            }
        }
    }
}
