//! Domain entities

pub mod conversation;
pub mod message;
pub mod read_receipt;
pub mod user;

pub use conversation::{
    pair_key, Conversation, ConversationKind, ConversationStatus, Participant, ParticipantRole,
};
pub use message::{AttachmentRef, DeliveryStatus, Message, MessageType};
pub use read_receipt::ReadReceipt;
pub use user::{AccountRole, UserRef};
