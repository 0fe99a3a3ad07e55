//! # inbox-core
//!
//! Domain layer for the marketplace messaging core: entities, the role
//! conversation policy, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod policy;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    pair_key, AccountRole, AttachmentRef, Conversation, ConversationKind, ConversationStatus,
    DeliveryStatus, Message, MessageType, Participant, ParticipantRole, ReadReceipt, UserRef,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use policy::{can_converse, check_converse};
pub use traits::{
    ConversationRepository, MessageRepository, PageQuery, RepoResult, UnreadRepository,
    UserDirectory,
};
