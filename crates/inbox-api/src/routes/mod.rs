//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{conversations, health, messages, unread};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(conversation_routes())
        .merge(unread_routes())
}

/// Conversation routes
fn conversation_routes() -> Router<AppState> {
    Router::new()
        // Conversation lifecycle
        .route("/conversations", post(conversations::start_conversation))
        .route("/conversations", get(conversations::list_conversations))
        .route("/conversations/:conversation_id", get(conversations::get_conversation))
        .route(
            "/conversations/:conversation_id/archive",
            post(conversations::archive_conversation),
        )
        // Messages
        .route(
            "/conversations/:conversation_id/messages",
            get(messages::get_messages),
        )
        .route(
            "/conversations/:conversation_id/messages",
            post(messages::create_message),
        )
        // Read receipts
        .route("/conversations/:conversation_id/read", post(messages::mark_read))
        // Per-conversation unread badge
        .route(
            "/conversations/:conversation_id/unread",
            get(unread::get_conversation_unread),
        )
}

/// Unread badge routes
fn unread_routes() -> Router<AppState> {
    Router::new().route("/unread", get(unread::get_unread_total))
}
