//! # inbox-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AttachmentPayload, ConversationResponse, ConversationSummaryResponse, CreateMessageRequest,
    HealthResponse, MarkReadResponse, MessageResponse, PaginatedResponse, ReadinessResponse,
    StartConversationRequest, UnreadCountResponse,
};
pub use services::{
    ConversationService, EventBus, MessageService, ReceiptService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
