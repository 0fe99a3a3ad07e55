//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with offset-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, per_page: i64) -> Self {
        let count = data.len();
        Self {
            data,
            pagination: PaginationMeta {
                page,
                per_page,
                count,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: i64,
    /// Page size used
    pub per_page: i64,
    /// Number of items in this page
    pub count: usize,
}

// ============================================================================
// User Responses
// ============================================================================

/// User identity as seen by conversation peers
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub role: String,
}

/// A conversation participant with their role inside the conversation
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub user_id: Uuid,
    pub role: String,
}

// ============================================================================
// Conversation Responses
// ============================================================================

/// Full conversation detail
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub id: Uuid,
    pub kind: String,
    pub status: String,
    pub created_by: Uuid,
    pub participants: Vec<ParticipantResponse>,
    pub created_at: DateTime<Utc>,
}

/// Conversation as listed in a user's inbox
#[derive(Debug, Serialize)]
pub struct ConversationSummaryResponse {
    pub id: Uuid,
    pub status: String,
    /// The other participant, absent only for data not yet backfilled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterpart: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<MessageResponse>,
    pub unread_count: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Attachment reference in a message response
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentResponse {
    pub url: String,
    pub name: String,
}

/// A message with its sender and delivery state
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender: UserResponse,
    pub content: String,
    pub message_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentResponse>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Receipt Responses
// ============================================================================

/// Outcome of marking a conversation read
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub conversation_id: Uuid,
    /// Messages newly advanced to read by this call
    pub read_count: usize,
    pub message_ids: Vec<Uuid>,
}

/// Unread badge counts for a user
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub total: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool) -> Self {
        let status_of = |healthy: bool| {
            if healthy {
                "healthy".to_string()
            } else {
                "unhealthy".to_string()
            }
        };

        Self {
            status: if database_healthy {
                "ready".to_string()
            } else {
                "not_ready".to_string()
            },
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: status_of(database_healthy),
            },
        }
    }
}
