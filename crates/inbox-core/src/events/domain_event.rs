//! Domain events - emitted when messaging state changes
//!
//! The payloads are serializable and self-contained so a caller can fan
//! them out to whatever live-update transport it runs (websockets, SSE,
//! push). Delivery itself is out of scope for the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{DeliveryStatus, MessageType};

/// All domain events the messaging core emits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    ConversationCreated(ConversationCreatedEvent),
    MessagePosted(MessagePostedEvent),
    MessagesDelivered(MessagesDeliveredEvent),
    MessagesRead(MessagesReadEvent),
}

impl DomainEvent {
    /// Get the event type name
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ConversationCreated(_) => "CONVERSATION_CREATED",
            Self::MessagePosted(_) => "MESSAGE_POSTED",
            Self::MessagesDelivered(_) => "MESSAGES_DELIVERED",
            Self::MessagesRead(_) => "MESSAGES_READ",
        }
    }

    /// Get the timestamp of the event
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ConversationCreated(e) => e.timestamp,
            Self::MessagePosted(e) => e.timestamp,
            Self::MessagesDelivered(e) => e.timestamp,
            Self::MessagesRead(e) => e.timestamp,
        }
    }

    /// Conversation this event belongs to
    #[must_use]
    pub fn conversation_id(&self) -> Uuid {
        match self {
            Self::ConversationCreated(e) => e.conversation_id,
            Self::MessagePosted(e) => e.conversation_id,
            Self::MessagesDelivered(e) => e.conversation_id,
            Self::MessagesRead(e) => e.conversation_id,
        }
    }
}

/// A private conversation was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationCreatedEvent {
    pub conversation_id: Uuid,
    pub initiator_id: Uuid,
    pub counterpart_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// A message was posted; the payload carries everything a transport needs
/// to render it for the other participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePostedEvent {
    pub conversation_id: Uuid,
    pub message_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub message_type: MessageType,
    pub status: DeliveryStatus,
    pub timestamp: DateTime<Utc>,
}

/// Inbound messages were marked delivered for a viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesDeliveredEvent {
    pub conversation_id: Uuid,
    pub viewer_id: Uuid,
    pub delivered: u64,
    pub timestamp: DateTime<Utc>,
}

/// Inbound messages were marked read for a viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesReadEvent {
    pub conversation_id: Uuid,
    pub viewer_id: Uuid,
    pub message_ids: Vec<Uuid>,
    pub timestamp: DateTime<Utc>,
}
