//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::AccountRole;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Cannot open a conversation with yourself")]
    SelfConversation,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Accounts with role '{a}' may not message accounts with role '{b}'")]
    RolePairDenied { a: AccountRole, b: AccountRole },

    #[error("User {user_id} is not a participant of conversation {conversation_id}")]
    NotParticipant {
        conversation_id: Uuid,
        user_id: Uuid,
    },

    // =========================================================================
    // Invalid State
    // =========================================================================
    #[error("Conversation {0} is archived")]
    ConversationArchived(Uuid),

    #[error("Operation requires a private conversation")]
    NotPrivateConversation,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ConversationNotFound(_) => "UNKNOWN_CONVERSATION",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::SelfConversation => "SELF_CONVERSATION",
            Self::RolePairDenied { .. } => "ROLE_PAIR_DENIED",
            Self::NotParticipant { .. } => "NOT_PARTICIPANT",
            Self::ConversationArchived(_) => "CONVERSATION_ARCHIVED",
            Self::NotPrivateConversation => "NOT_PRIVATE_CONVERSATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ConversationNotFound(_))
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::SelfConversation)
    }

    /// Check if this is an authorization error
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::RolePairDenied { .. } | Self::NotParticipant { .. }
        )
    }

    /// Check if this is an invalid-state error
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::ConversationArchived(_) | Self::NotPrivateConversation
        )
    }
}
