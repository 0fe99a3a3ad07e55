//! Conversation service
//!
//! Handles role-gated conversation resolution, inbox listing, and archival.

use chrono::Utc;
use inbox_core::{
    check_converse, Conversation, DomainError, PageQuery, Participant, ParticipantRole, UserRef,
};
use inbox_core::events::ConversationCreatedEvent;
use inbox_core::DomainEvent;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    ConversationResponse, ConversationSummaryResponse, ConversationWithDetails, MessageWithSender,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Conversation service
pub struct ConversationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConversationService<'a> {
    /// Create a new ConversationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the private conversation between the caller and a counterpart,
    /// creating it if it does not exist yet.
    ///
    /// Idempotent: repeated calls with the same pair, in either direction,
    /// land on the same conversation. A concurrent first call for the pair is
    /// settled by the repository; the loser adopts the winning row.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        initiator_id: Uuid,
        counterpart_id: Uuid,
    ) -> ServiceResult<ConversationResponse> {
        if initiator_id == counterpart_id {
            return Err(DomainError::SelfConversation.into());
        }

        let initiator = self.require_user(initiator_id).await?;
        let counterpart = self.require_user(counterpart_id).await?;

        check_converse(initiator.role, counterpart.role)?;

        if let Some(existing) = self
            .ctx
            .conversation_repo()
            .find_private_between(initiator_id, counterpart_id)
            .await?
        {
            return self.detail_response(&existing).await;
        }

        let conversation = Conversation::new_private(Uuid::new_v4(), initiator_id);
        let participants = [
            Participant::new(conversation.id, initiator_id, ParticipantRole::Initiator),
            Participant::new(conversation.id, counterpart_id, ParticipantRole::Counterpart),
        ];

        let stored = self
            .ctx
            .conversation_repo()
            .create_private(&conversation, &participants)
            .await?;

        // Only the creation winner announces the conversation.
        if stored.id == conversation.id {
            info!(
                conversation_id = %stored.id,
                initiator_id = %initiator_id,
                counterpart_id = %counterpart_id,
                "conversation created"
            );

            self.ctx
                .events()
                .publish(DomainEvent::ConversationCreated(ConversationCreatedEvent {
                    conversation_id: stored.id,
                    initiator_id,
                    counterpart_id,
                    timestamp: Utc::now(),
                }));
        }

        self.detail_response(&stored).await
    }

    /// List the caller's conversations, most recently active first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Uuid,
        page: PageQuery,
    ) -> ServiceResult<Vec<ConversationSummaryResponse>> {
        let conversations = self
            .ctx
            .conversation_repo()
            .find_by_user(user_id, page)
            .await?;

        let mut summaries = Vec::with_capacity(conversations.len());

        for conversation in conversations {
            let details = self.load_details(conversation, user_id).await?;
            summaries.push(ConversationSummaryResponse::from(details));
        }

        Ok(summaries)
    }

    /// Get one conversation the caller participates in
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<ConversationResponse> {
        let conversation = self.require_conversation(conversation_id).await?;
        self.require_participant(conversation_id, user_id).await?;

        self.detail_response(&conversation).await
    }

    /// Archive a conversation. Idempotent; archived conversations stay
    /// readable but reject new messages.
    #[instrument(skip(self))]
    pub async fn archive(&self, conversation_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.require_conversation(conversation_id).await?;
        self.require_participant(conversation_id, user_id).await?;

        self.ctx.conversation_repo().archive(conversation_id).await?;

        info!(conversation_id = %conversation_id, "conversation archived");

        Ok(())
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

    async fn detail_response(
        &self,
        conversation: &Conversation,
    ) -> ServiceResult<ConversationResponse> {
        let participants = self
            .ctx
            .conversation_repo()
            .participants(conversation.id)
            .await?;

        let details = ConversationWithDetails {
            conversation: conversation.clone(),
            participants,
            counterpart: None,
            last_message: None,
            unread_count: 0,
        };

        Ok(details.into_response())
    }

    async fn load_details(
        &self,
        conversation: Conversation,
        viewer_id: Uuid,
    ) -> ServiceResult<ConversationWithDetails> {
        let participants = self
            .ctx
            .conversation_repo()
            .participants(conversation.id)
            .await?;

        let counterpart_id = participants
            .iter()
            .map(|p| p.user_id)
            .find(|id| *id != viewer_id);

        let counterpart = match counterpart_id {
            Some(id) => self.ctx.user_directory().find_by_id(id).await?,
            None => None,
        };

        let last_message = match self.ctx.message_repo().latest(conversation.id).await? {
            Some(message) => {
                let sender = self.require_user(message.sender_id).await?;
                Some(MessageWithSender { message, sender })
            }
            None => None,
        };

        let unread_count = self
            .ctx
            .unread_repo()
            .conversation_count(viewer_id, conversation.id)
            .await?;

        Ok(ConversationWithDetails {
            conversation,
            participants,
            counterpart,
            last_message,
            unread_count,
        })
    }
}
