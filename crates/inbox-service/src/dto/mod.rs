//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{AttachmentPayload, CreateMessageRequest, StartConversationRequest};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AttachmentResponse, ConversationResponse, ConversationSummaryResponse,
    HealthChecks, HealthResponse, MarkReadResponse, MessageResponse, PaginatedResponse,
    PaginationMeta, ParticipantResponse, ReadinessResponse, UnreadCountResponse, UserResponse,
};

// Re-export mappers and helper structs
pub use mappers::{ConversationWithDetails, MessageWithSender};
