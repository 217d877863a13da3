// src/routes/mod.rs
pub mod chat;
pub mod health;
pub mod schedule;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use schedule::schedule_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { "YOU ARE CONNECTED TO KIDZIE" }))
        .route("/chat", post(chat_handler))
        .route("/generate-schedule", post(schedule_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
