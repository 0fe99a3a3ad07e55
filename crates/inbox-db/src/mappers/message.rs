//! Message entity <-> model mapper

use inbox_core::{AttachmentRef, DeliveryStatus, DomainError, Message, MessageType};

use crate::models::MessageModel;

use super::bad_enum;

/// Convert MessageModel to Message entity
impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let message_type = MessageType::parse(&model.message_type)
            .ok_or_else(|| bad_enum("message type", &model.message_type))?;
        let status = DeliveryStatus::parse(&model.status)
            .ok_or_else(|| bad_enum("delivery status", &model.status))?;

        let attachment = model.attachment_url.map(|url| AttachmentRef {
            url,
            name: model.attachment_name.unwrap_or_default(),
        });

        Ok(Message {
            id: model.id,
            conversation_id: model.conversation_id,
            sender_id: model.sender_id,
            content: model.content,
            message_type,
            attachment,
            status,
            created_at: model.created_at,
        })
    }
}

/// Convert Message entity reference to values for database insertion
pub struct MessageInsert<'a> {
    pub id: uuid::Uuid,
    pub conversation_id: uuid::Uuid,
    pub sender_id: uuid::Uuid,
    pub content: &'a str,
    pub message_type: &'static str,
    pub attachment_url: Option<&'a str>,
    pub attachment_name: Option<&'a str>,
    pub status: &'static str,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> MessageInsert<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            id: message.id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            content: &message.content,
            message_type: message.message_type.as_str(),
            attachment_url: message.attachment.as_ref().map(|a| a.url.as_str()),
            attachment_name: message.attachment.as_ref().map(|a| a.name.as_str()),
            status: message.status.as_str(),
            created_at: message.created_at,
        }
    }
}
