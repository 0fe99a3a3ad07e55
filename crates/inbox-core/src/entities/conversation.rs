//! Conversation and Participant entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversation kind
///
/// Only `Private` (exactly two participants) carries business rules today;
/// `Group` is reserved for future N-party support and is never created by
/// the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    #[default]
    Private,
    Group,
}

impl ConversationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Group => "group",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "private" => Some(Self::Private),
            "group" => Some(Self::Group),
            _ => None,
        }
    }
}

/// Conversation lifecycle status. Conversations are never deleted, only archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    #[default]
    Active,
    Archived,
}

impl ConversationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// Role of a participant within a conversation.
///
/// Records who opened the conversation - not the user's account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Initiator,
    Counterpart,
}

impl ParticipantRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initiator => "initiator",
            Self::Counterpart => "counterpart",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "initiator" => Some(Self::Initiator),
            "counterpart" => Some(Self::Counterpart),
            _ => None,
        }
    }
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: Uuid,
    pub kind: ConversationKind,
    pub created_by: Uuid,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new private conversation opened by `created_by`
    #[must_use]
    pub fn new_private(id: Uuid, created_by: Uuid) -> Self {
        Self {
            id,
            kind: ConversationKind::Private,
            created_by,
            status: ConversationStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Check if this is a private (two-party) conversation
    #[inline]
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self.kind, ConversationKind::Private)
    }

    /// Check if the conversation has been archived
    #[inline]
    #[must_use]
    pub fn is_archived(&self) -> bool {
        matches!(self.status, ConversationStatus::Archived)
    }

    /// Archive the conversation
    pub fn archive(&mut self) {
        self.status = ConversationStatus::Archived;
    }
}

/// Canonical key for a private conversation's unordered participant pair.
///
/// The same two users always map to the same key regardless of who
/// initiated, so a uniqueness constraint over it guarantees at most one
/// private conversation per pair.
#[must_use]
pub fn pair_key(a: Uuid, b: Uuid) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    format!("{low}:{high}")
}

/// Participant entity: a user associated with a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub conversation_id: Uuid,
    pub user_id: Uuid,
    pub role: ParticipantRole,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new Participant
    #[must_use]
    pub fn new(conversation_id: Uuid, user_id: Uuid, role: ParticipantRole) -> Self {
        Self {
            conversation_id,
            user_id,
            role,
            created_at: Utc::now(),
        }
    }
}
