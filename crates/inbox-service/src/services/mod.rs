//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod conversation;
pub mod error;
pub mod events;
pub mod message;
pub mod receipt;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use conversation::ConversationService;
pub use error::{ServiceError, ServiceResult};
pub use events::EventBus;
pub use message::MessageService;
pub use receipt::ReceiptService;
