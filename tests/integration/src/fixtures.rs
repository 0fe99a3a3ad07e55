//! Test fixtures and data generators
//!
//! Accounts live in an external directory in production; tests seed the
//! local `users` table directly and mint access tokens with the shared
//! JWT secret.

use anyhow::Result;
use inbox_common::JwtService;
use inbox_core::AccountRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::TestServer;

/// Seed a user with the given role and return its id
pub async fn seed_user(server: &TestServer, role: AccountRole) -> Result<Uuid> {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO users (id, role) VALUES ($1, $2::account_role)")
        .bind(id)
        .bind(role.as_str())
        .execute(&server.pool)
        .await?;

    Ok(id)
}

/// Issue an access token for a seeded user
pub fn token_for(server: &TestServer, user_id: Uuid) -> Result<String> {
    let jwt = JwtService::new(
        &server.config.jwt.secret,
        server.config.jwt.access_token_expiry,
    );
    Ok(jwt.issue_access_token(user_id)?)
}

/// Seed a buyer/seller pair and tokens for both
pub async fn seed_pair(server: &TestServer) -> Result<(Uuid, String, Uuid, String)> {
    let buyer = seed_user(server, AccountRole::Counterpart).await?;
    let seller = seed_user(server, AccountRole::Standard).await?;
    let buyer_token = token_for(server, buyer)?;
    let seller_token = token_for(server, seller)?;
    Ok((buyer, buyer_token, seller, seller_token))
}

/// Start conversation request
#[derive(Debug, Serialize)]
pub struct StartConversationBody {
    pub counterpart_id: Uuid,
}

/// Create message request
#[derive(Debug, Serialize)]
pub struct CreateMessageBody {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentBody>,
}

impl CreateMessageBody {
    pub fn text(content: &str) -> Self {
        Self {
            content: content.to_string(),
            message_type: None,
            attachment: None,
        }
    }
}

/// Attachment payload
#[derive(Debug, Serialize)]
pub struct AttachmentBody {
    pub url: String,
    pub name: String,
}

/// Conversation response
#[derive(Debug, Deserialize)]
pub struct ConversationBody {
    pub id: Uuid,
    pub kind: String,
    pub status: String,
    pub created_by: Uuid,
    pub participants: Vec<ParticipantBody>,
    pub created_at: String,
}

/// Participant response
#[derive(Debug, Deserialize)]
pub struct ParticipantBody {
    pub user_id: Uuid,
    pub role: String,
}

/// Conversation summary response
#[derive(Debug, Deserialize)]
pub struct ConversationSummaryBody {
    pub id: Uuid,
    pub status: String,
    pub counterpart: Option<UserBody>,
    pub last_message: Option<MessageBody>,
    pub unread_count: i64,
    pub created_at: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: Uuid,
    pub role: String,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender: UserBody,
    pub content: String,
    pub message_type: String,
    pub status: String,
    pub created_at: String,
}

/// Mark-read response
#[derive(Debug, Deserialize)]
pub struct MarkReadBody {
    pub conversation_id: Uuid,
    pub read_count: usize,
    pub message_ids: Vec<Uuid>,
}

/// Unread badge response
#[derive(Debug, Deserialize)]
pub struct UnreadTotalBody {
    pub total: i64,
}

/// Per-conversation unread response
#[derive(Debug, Deserialize)]
pub struct ConversationUnreadBody {
    pub conversation_id: Uuid,
    pub unread_count: i64,
}

/// Paginated list response
#[derive(Debug, Deserialize)]
pub struct PageBody<T> {
    pub data: Vec<T>,
    pub pagination: PageMetaBody,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMetaBody {
    pub page: i64,
    pub per_page: i64,
    pub count: usize,
}
