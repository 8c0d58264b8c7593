//! HTTP API exposing the research assistant.
//!
//! A deliberately small surface: `POST /chat` forwards the caller's
//! last message to the agent, `GET /health` reports liveness.

mod chat;
pub mod routes;
pub mod types;

pub use routes::{serve, AppState};
