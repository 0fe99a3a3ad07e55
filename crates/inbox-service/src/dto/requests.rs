//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Conversation Requests
// ============================================================================

/// Start (or resolve) a private conversation with another user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartConversationRequest {
    pub counterpart_id: Uuid,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Attachment reference submitted alongside a message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachmentPayload {
    #[validate(url(message = "Attachment url must be a valid URL"))]
    pub url: String,

    #[validate(length(min = 1, max = 255, message = "Attachment name must be 1-255 characters"))]
    pub name: String,
}

/// Post a message to a conversation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    /// Message type: "text" (default), "image", or "file"
    pub message_type: Option<String>,

    #[validate(nested)]
    pub attachment: Option<AttachmentPayload>,
}
