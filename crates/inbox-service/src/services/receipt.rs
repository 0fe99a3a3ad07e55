//! Receipt service
//!
//! Marks conversations read and serves unread badge counts.

use chrono::Utc;
use inbox_core::events::MessagesReadEvent;
use inbox_core::{DomainError, DomainEvent};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{MarkReadResponse, UnreadCountResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Receipt service
pub struct ReceiptService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReceiptService<'a> {
    /// Create a new ReceiptService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark every inbound message in the conversation read for the viewer
    ///
    /// Idempotent on repeats; already-read messages keep their state and a
    /// fresh receipt timestamp. Messages posted after the call's snapshot
    /// stay unread.
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        conversation_id: Uuid,
        viewer_id: Uuid,
    ) -> ServiceResult<MarkReadResponse> {
        self.require_conversation(conversation_id).await?;
        self.require_participant(conversation_id, viewer_id).await?;

        let message_ids = self
            .ctx
            .message_repo()
            .mark_read(conversation_id, viewer_id)
            .await?;

        if !message_ids.is_empty() {
            info!(
                conversation_id = %conversation_id,
                count = message_ids.len(),
                "messages marked read"
            );

            self.ctx
                .events()
                .publish(DomainEvent::MessagesRead(MessagesReadEvent {
                    conversation_id,
                    viewer_id,
                    message_ids: message_ids.clone(),
                    timestamp: Utc::now(),
                }));
        }

        Ok(MarkReadResponse {
            conversation_id,
            read_count: message_ids.len(),
            message_ids,
        })
    }

    /// Total unread messages across all of the user's conversations
    #[instrument(skip(self))]
    pub async fn unread_total(&self, user_id: Uuid) -> ServiceResult<UnreadCountResponse> {
        let total = self.ctx.unread_repo().total_count(user_id).await?;
        Ok(UnreadCountResponse { total })
    }

    /// Unread count for one conversation
    #[instrument(skip(self))]
    pub async fn unread_in_conversation(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<i64> {
        self.require_participant(conversation_id, user_id).await?;

        self.ctx
            .unread_repo()
            .conversation_count(user_id, conversation_id)
            .await
            .map_err(Into::into)
    }

    // === Internals ===

    async fn require_conversation(&self, conversation_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .conversation_repo()
            .find_by_id(conversation_id)
            .await?
            .map(|_| ())
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
