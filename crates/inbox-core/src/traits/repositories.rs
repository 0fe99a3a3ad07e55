//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation. `UserDirectory` is the narrow interface to
//! the external accounts system - the messaging core never writes to it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Conversation, Message, Participant, ReadReceipt, UserRef};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number
    pub page: i64,
    /// Page size, clamped to 1..=100
    pub per_page: i64,
}

impl PageQuery {
    /// Default page size
    pub const DEFAULT_PER_PAGE: i64 = 50;
    /// Maximum page size
    pub const MAX_PER_PAGE: i64 = 100;

    /// Create a page query, clamping out-of-range values
    #[must_use]
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// Row offset for SQL queries
    #[inline]
    #[must_use]
    pub fn offset(self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Row limit for SQL queries
    #[inline]
    #[must_use]
    pub fn limit(self) -> i64 {
        self.per_page
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PER_PAGE)
    }
}

// ============================================================================
// User Directory (external accounts system, read-only)
// ============================================================================

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user id to its identity and account role
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserRef>>;
}

// ============================================================================
// Conversation Repository
// ============================================================================

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Find conversation by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Conversation>>;

    /// Find the private conversation between two users, if any (order-independent)
    async fn find_private_between(&self, a: Uuid, b: Uuid) -> RepoResult<Option<Conversation>>;

    /// List conversations a user participates in, ordered by most recent
    /// message time descending (conversations without messages last)
    async fn find_by_user(&self, user_id: Uuid, page: PageQuery) -> RepoResult<Vec<Conversation>>;

    /// Create a private conversation and both participant rows atomically.
    ///
    /// The canonical pair key is unique, so a concurrent creation for the
    /// same pair loses the insert; implementations must then return the
    /// winning row instead of erroring.
    async fn create_private(
        &self,
        conversation: &Conversation,
        participants: &[Participant; 2],
    ) -> RepoResult<Conversation>;

    /// Get all participants of a conversation
    async fn participants(&self, conversation_id: Uuid) -> RepoResult<Vec<Participant>>;

    /// Check if a user is a participant of a conversation
    async fn is_participant(&self, conversation_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Archive a conversation (conversations are never deleted)
    async fn archive(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// List messages in a conversation, ascending by creation time
    async fn find_by_conversation(
        &self,
        conversation_id: Uuid,
        page: PageQuery,
    ) -> RepoResult<Vec<Message>>;

    /// Most recent message in a conversation, if any
    async fn latest(&self, conversation_id: Uuid) -> RepoResult<Option<Message>>;

    /// Persist a new message and bump the unread counters of the other
    /// participants, as one atomic unit
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Advance all inbound `Sent` messages to `Delivered` for a viewer.
    /// Never touches `Read` messages. Returns the number advanced.
    async fn mark_delivered(&self, conversation_id: Uuid, viewer_id: Uuid) -> RepoResult<u64>;

    /// Mark all inbound messages read for a viewer: set status to `Read`
    /// where not already read, upsert receipts (last-write-wins `read_at`),
    /// and decrement the unread counter by the newly-read count, as one
    /// atomic unit scoped to messages existing at query time.
    ///
    /// Returns the ids of the newly-read messages.
    async fn mark_read(&self, conversation_id: Uuid, viewer_id: Uuid) -> RepoResult<Vec<Uuid>>;

    /// Fetch the receipt a user holds for a message, if any
    async fn receipt(&self, message_id: Uuid, user_id: Uuid) -> RepoResult<Option<ReadReceipt>>;
}

// ============================================================================
// Unread Repository
// ============================================================================

/// Queries over the incrementally maintained unread counters.
///
/// The counters are written by `MessageRepository::create` and
/// `MessageRepository::mark_read`; this port only reads them, keeping the
/// badge-count hot path free of full-history scans.
#[async_trait]
pub trait UnreadRepository: Send + Sync {
    /// Unread count for a user within one conversation
    async fn conversation_count(&self, user_id: Uuid, conversation_id: Uuid) -> RepoResult<i64>;

    /// Total unread count for a user across all their conversations
    async fn total_count(&self, user_id: Uuid) -> RepoResult<i64>;
}
