//! Entity to model mappers
//!
//! This module provides conversions between domain entities (inbox-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects,
//!   rejecting rows whose enum columns hold unrecognized text
//! - `*Insert` structs: Prepare entity data for database operations

mod conversation;
mod message;
mod read_receipt;
mod user;

pub use conversation::{ConversationInsert, ParticipantInsert};
pub use message::MessageInsert;

/// Error for an enum column whose text no entity variant matches
pub(crate) fn bad_enum(column: &str, value: &str) -> inbox_core::DomainError {
    inbox_core::DomainError::DatabaseError(format!("unrecognized {column} value '{value}'"))
}
