//! Database models - SQLx-compatible structs for PostgreSQL tables

mod conversation;
mod message;
mod read_receipt;
mod user;

pub use conversation::{ConversationModel, ParticipantModel};
pub use message::MessageModel;
pub use read_receipt::ReadReceiptModel;
pub use user::UserModel;
