//! Message handlers
//!
//! Endpoints for posting, listing, and acknowledging messages.

use axum::{
    extract::{Path, State},
    Json,
};
use inbox_service::{
    CreateMessageRequest, MarkReadResponse, MessageResponse, MessageService, PaginatedResponse,
    ReceiptService,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::handlers::conversations::parse_id;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get messages in a conversation, oldest first
///
/// GET /conversations/{conversation_id}/messages
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let conversation_id = parse_id(&conversation_id)?;

    let service = MessageService::new(state.service_context());
    let messages = service.list(conversation_id, auth.user_id, page).await?;
    Ok(Json(PaginatedResponse::new(messages, page.page, page.per_page)))
}

/// Post a message to a conversation
///
/// POST /conversations/{conversation_id}/messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let conversation_id = parse_id(&conversation_id)?;

    let service = MessageService::new(state.service_context());
    let response = service.post(conversation_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Mark every inbound message in a conversation read
///
/// POST /conversations/{conversation_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<MarkReadResponse>> {
    let conversation_id = parse_id(&conversation_id)?;

    let service = ReceiptService::new(state.service_context());
    let response = service.mark_read(conversation_id, auth.user_id).await?;
    Ok(Json(response))
}
