//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in inbox-core.
//! Each repository handles database operations for a specific domain entity.

mod conversation;
mod error;
mod message;
mod unread;
mod user;

pub use conversation::PgConversationRepository;
pub use message::PgMessageRepository;
pub use unread::PgUnreadRepository;
pub use user::PgUserDirectory;
