//! Conversation entity <-> model mapper

use inbox_core::{
    Conversation, ConversationKind, ConversationStatus, DomainError, Participant, ParticipantRole,
};

use crate::models::{ConversationModel, ParticipantModel};

use super::bad_enum;

/// Convert ConversationModel to Conversation entity
impl TryFrom<ConversationModel> for Conversation {
    type Error = DomainError;

    fn try_from(model: ConversationModel) -> Result<Self, Self::Error> {
        Ok(Conversation {
            id: model.id,
            kind: ConversationKind::parse(&model.kind)
                .ok_or_else(|| bad_enum("conversation kind", &model.kind))?,
            created_by: model.created_by,
            status: ConversationStatus::parse(&model.status)
                .ok_or_else(|| bad_enum("conversation status", &model.status))?,
            created_at: model.created_at,
        })
    }
}

/// Convert ParticipantModel to Participant entity
impl TryFrom<ParticipantModel> for Participant {
    type Error = DomainError;

    fn try_from(model: ParticipantModel) -> Result<Self, Self::Error> {
        Ok(Participant {
            conversation_id: model.conversation_id,
            user_id: model.user_id,
            role: ParticipantRole::parse(&model.role)
                .ok_or_else(|| bad_enum("participant role", &model.role))?,
            created_at: model.created_at,
        })
    }
}

/// Convert Conversation entity reference to values for database insertion
pub struct ConversationInsert {
    pub id: uuid::Uuid,
    pub kind: &'static str,
    pub status: &'static str,
    pub created_by: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ConversationInsert {
    pub fn new(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id,
            kind: conversation.kind.as_str(),
            status: conversation.status.as_str(),
            created_by: conversation.created_by,
            created_at: conversation.created_at,
        }
    }
}

/// Convert Participant entity reference to values for database insertion
pub struct ParticipantInsert {
    pub conversation_id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub role: &'static str,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ParticipantInsert {
    pub fn new(participant: &Participant) -> Self {
        Self {
            conversation_id: participant.conversation_id,
            user_id: participant.user_id,
            role: participant.role.as_str(),
            created_at: participant.created_at,
        }
    }
}
