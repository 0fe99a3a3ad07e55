//! Conversation handlers
//!
//! Endpoints for starting, listing, and archiving conversations.

use axum::{
    extract::{Path, State},
    Json,
};
use inbox_service::{
    ConversationResponse, ConversationService, ConversationSummaryResponse, PaginatedResponse,
    StartConversationRequest,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Start (or resolve) a conversation with a counterpart
///
/// POST /conversations
pub async fn start_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<StartConversationRequest>,
) -> ApiResult<Created<Json<ConversationResponse>>> {
    let service = ConversationService::new(state.service_context());
    let response = service.resolve(auth.user_id, request.counterpart_id).await?;
    Ok(Created(Json(response)))
}

/// List the caller's conversations
///
/// GET /conversations
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<ConversationSummaryResponse>>> {
    let service = ConversationService::new(state.service_context());
    let summaries = service.list(auth.user_id, page).await?;
    Ok(Json(PaginatedResponse::new(summaries, page.page, page.per_page)))
}

/// Get conversation by ID
///
/// GET /conversations/{conversation_id}
pub async fn get_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<ConversationResponse>> {
    let conversation_id = parse_id(&conversation_id)?;

    let service = ConversationService::new(state.service_context());
    let response = service.get(conversation_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Archive a conversation
///
/// POST /conversations/{conversation_id}/archive
pub async fn archive_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(conversation_id): Path<String>,
) -> ApiResult<NoContent> {
    let conversation_id = parse_id(&conversation_id)?;

    let service = ConversationService::new(state.service_context());
    service.archive(conversation_id, auth.user_id).await?;
    Ok(NoContent)
}

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid conversation_id format"))
}
