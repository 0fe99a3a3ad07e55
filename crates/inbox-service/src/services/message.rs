//! Message service
//!
//! Handles posting messages and reading conversation history. Viewing a
//! conversation advances inbound messages to the delivered state.

use chrono::Utc;
use inbox_core::events::{MessagePostedEvent, MessagesDeliveredEvent};
use inbox_core::{
    check_converse, AttachmentRef, Conversation, DomainError, DomainEvent, Message, MessageType,
    PageQuery, UserRef,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateMessageRequest, MessageResponse, MessageWithSender};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message to a conversation
    ///
    /// The conversing policy is re-checked against the participants' current
    /// roles; a pair that was valid at creation time can since have become
    /// invalid.
    #[instrument(skip(self, request))]
    pub async fn post(
        &self,
        conversation_id: Uuid,
        sender_id: Uuid,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let conversation = self.require_conversation(conversation_id).await?;

        if !conversation.is_private() {
            return Err(DomainError::NotPrivateConversation.into());
        }

        let participants = self
            .ctx
            .conversation_repo()
            .participants(conversation_id)
            .await?;

        let is_participant = participants.iter().any(|p| p.user_id == sender_id);
        if !is_participant {
            return Err(DomainError::NotParticipant {
                conversation_id,
                user_id: sender_id,
            }
            .into());
        }

        if conversation.is_archived() {
            return Err(DomainError::ConversationArchived(conversation_id).into());
        }

        let sender = self.require_user(sender_id).await?;

        let other_id = participants
            .iter()
            .map(|p| p.user_id)
            .find(|id| *id != sender_id);

        if let Some(other_id) = other_id {
            let other = self.require_user(other_id).await?;
            check_converse(sender.role, other.role)?;
        }

        let message_type = match request.message_type.as_deref() {
            None => MessageType::Text,
            Some(s) => MessageType::parse(s)
                .ok_or_else(|| ServiceError::validation(format!("Unknown message type: {s}")))?,
        };

        let attachment = request.attachment.map(|a| AttachmentRef {
            url: a.url,
            name: a.name,
        });

        let message = Message::new(
            Uuid::new_v4(),
            conversation_id,
            sender_id,
            request.content,
            message_type,
            attachment,
        );

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, conversation_id = %conversation_id, "message posted");

        self.ctx
            .events()
            .publish(DomainEvent::MessagePosted(MessagePostedEvent {
                conversation_id,
                message_id: message.id,
                sender_id,
                content: message.content.clone(),
                message_type: message.message_type,
                status: message.status,
                timestamp: Utc::now(),
            }));

        Ok(MessageResponse::from(MessageWithSender { message, sender }))
    }

    /// List messages in a conversation, oldest first
    ///
    /// Viewing counts as delivery: inbound messages still in the sent state
    /// advance to delivered before the page is fetched, so the caller sees
    /// the post-delivery statuses.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        conversation_id: Uuid,
        viewer_id: Uuid,
        page: PageQuery,
    ) -> ServiceResult<Vec<MessageResponse>> {
        self.require_conversation(conversation_id).await?;
        self.require_participant(conversation_id, viewer_id).await?;

        let delivered = self
            .ctx
            .message_repo()
            .mark_delivered(conversation_id, viewer_id)
            .await?;

        if delivered > 0 {
            self.ctx
                .events()
                .publish(DomainEvent::MessagesDelivered(MessagesDeliveredEvent {
                    conversation_id,
                    viewer_id,
                    delivered,
                    timestamp: Utc::now(),
                }));
        }

        let messages = self
            .ctx
            .message_repo()
            .find_by_conversation(conversation_id, page)
            .await?;

        // Two-party conversations have at most two senders; resolve each once.
        let mut senders: Vec<UserRef> = Vec::with_capacity(2);
        let mut responses = Vec::with_capacity(messages.len());

        for message in messages {
            let sender = match senders.iter().find(|u| u.id == message.sender_id) {
                Some(user) => user.clone(),
                None => {
                    let user = self.require_user(message.sender_id).await?;
                    senders.push(user.clone());
                    user
                }
            };
            responses.push(MessageResponse::from(MessageWithSender { message, sender }));
        }

        Ok(responses)
    }

    // === Internals ===

    async fn require_user(&self, user_id: Uuid) -> ServiceResult<UserRef> {
        self.ctx
            .user_directory()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    async fn require_conversation(&self, conversation_id: Uuid) -> ServiceResult<Conversation> {
        self.ctx
            .conversation_repo()
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| DomainError::ConversationNotFound(conversation_id).into())
    }

    async fn require_participant(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<()> {
        if self
            .ctx
            .conversation_repo()
            .is_participant(conversation_id, user_id)
            .await?
        {
            Ok(())
        } else {
            Err(DomainError::NotParticipant {
                conversation_id,
                user_id,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    // Covered by the in-memory repository tests in tests/service_tests.rs
}
