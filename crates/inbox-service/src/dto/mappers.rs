//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use inbox_core::{Conversation, Message, Participant, UserRef};

use super::responses::{
    AttachmentResponse, ConversationResponse, ConversationSummaryResponse, MessageResponse,
    ParticipantResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&UserRef> for UserResponse {
    fn from(user: &UserRef) -> Self {
        Self {
            id: user.id,
            role: user.role.as_str().to_string(),
        }
    }
}

impl From<UserRef> for UserResponse {
    fn from(user: UserRef) -> Self {
        Self::from(&user)
    }
}

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            user_id: participant.user_id,
            role: participant.role.as_str().to_string(),
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

/// A message paired with its resolved sender identity
#[derive(Debug, Clone)]
pub struct MessageWithSender {
    pub message: Message,
    pub sender: UserRef,
}

impl From<MessageWithSender> for MessageResponse {
    fn from(details: MessageWithSender) -> Self {
        let MessageWithSender { message, sender } = details;
        Self {
            id: message.id,
            conversation_id: message.conversation_id,
            sender: UserResponse::from(&sender),
            content: message.content,
            message_type: message.message_type.as_str().to_string(),
            attachment: message.attachment.map(|a| AttachmentResponse {
                url: a.url,
                name: a.name,
            }),
            status: message.status.as_str().to_string(),
            created_at: message.created_at,
        }
    }
}

// ============================================================================
// Conversation Mappers
// ============================================================================

impl From<&Conversation> for ConversationResponse {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id,
            kind: conversation.kind.as_str().to_string(),
            status: conversation.status.as_str().to_string(),
            created_by: conversation.created_by,
            participants: Vec::new(),
            created_at: conversation.created_at,
        }
    }
}

/// A conversation enriched with everything an inbox row needs
#[derive(Debug)]
pub struct ConversationWithDetails {
    pub conversation: Conversation,
    pub participants: Vec<Participant>,
    pub counterpart: Option<UserRef>,
    pub last_message: Option<MessageWithSender>,
    pub unread_count: i64,
}

impl ConversationWithDetails {
    /// Build the full detail response
    pub fn into_response(self) -> ConversationResponse {
        let mut response = ConversationResponse::from(&self.conversation);
        response.participants = self.participants.iter().map(ParticipantResponse::from).collect();
        response
    }
}

impl From<ConversationWithDetails> for ConversationSummaryResponse {
    fn from(details: ConversationWithDetails) -> Self {
        Self {
            id: details.conversation.id,
            status: details.conversation.status.as_str().to_string(),
            counterpart: details.counterpart.map(UserResponse::from),
            last_message: details.last_message.map(MessageResponse::from),
            unread_count: details.unread_count,
            created_at: details.conversation.created_at,
        }
    }
}
