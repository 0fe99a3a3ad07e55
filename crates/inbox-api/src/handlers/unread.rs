//! Unread count handlers
//!
//! Endpoints for unread badge counts.

use axum::{
    extract::{Path, State},
    Json,
};
use inbox_service::{ReceiptService, UnreadCountResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::handlers::conversations::parse_id;
use crate::response::ApiResult;
use crate::state::AppState;

/// Unread count for one conversation
#[derive(Debug, Serialize)]
pub struct ConversationUnreadResponse {
    pub conversation_id: Uuid,
    pub unread_count: i64,
}

/// Total unread messages across all conversations
///
/// GET /unread
pub async fn get_unread_total(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = ReceiptService::new(state.service_context());
    let response = service.unread_total(auth.user_id).await?;
    Ok(Json(response))
}

/// Unread count for a single conversation
///
/// GET /conversations/{conversation_id}/unread
pub async fn get_conversation_unread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<ConversationUnreadResponse>> {
    let conversation_id = parse_id(&conversation_id)?;

    let service = ReceiptService::new(state.service_context());
    let unread_count = service
        .unread_in_conversation(conversation_id, auth.user_id)
        .await?;

    Ok(Json(ConversationUnreadResponse {
        conversation_id,
        unread_count,
    }))
}
