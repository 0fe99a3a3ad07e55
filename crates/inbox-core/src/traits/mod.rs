//! Repository traits (ports)

pub mod repositories;

pub use repositories::{
    ConversationRepository, MessageRepository, PageQuery, RepoResult, UnreadRepository,
    UserDirectory,
};
