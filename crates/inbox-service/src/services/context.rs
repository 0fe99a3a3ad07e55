//! Service context - dependency container for services
//!
//! Holds the repositories and shared facilities every service needs. The
//! repositories are trait objects so tests can wire in-memory fakes.

use std::sync::Arc;

use inbox_common::auth::JwtService;
use inbox_core::{ConversationRepository, MessageRepository, UnreadRepository, UserDirectory};

use super::events::EventBus;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (conversation, message, unread counters)
/// - The read-only user directory
/// - JWT service for authentication
/// - The domain event bus
#[derive(Clone)]
pub struct ServiceContext {
    user_directory: Arc<dyn UserDirectory>,
    conversation_repo: Arc<dyn ConversationRepository>,
    message_repo: Arc<dyn MessageRepository>,
    unread_repo: Arc<dyn UnreadRepository>,
    jwt_service: Arc<JwtService>,
    events: EventBus,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_directory: Arc<dyn UserDirectory>,
        conversation_repo: Arc<dyn ConversationRepository>,
        message_repo: Arc<dyn MessageRepository>,
        unread_repo: Arc<dyn UnreadRepository>,
        jwt_service: Arc<JwtService>,
        events: EventBus,
    ) -> Self {
        Self {
            user_directory,
            conversation_repo,
            message_repo,
            unread_repo,
            jwt_service,
            events,
        }
    }

    /// Get the user directory
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }

    /// Get the conversation repository
    pub fn conversation_repo(&self) -> &dyn ConversationRepository {
        self.conversation_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the unread counter repository
    pub fn unread_repo(&self) -> &dyn UnreadRepository {
        self.unread_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the domain event bus
    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("events", &self.events)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_directory: Option<Arc<dyn UserDirectory>>,
    conversation_repo: Option<Arc<dyn ConversationRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    unread_repo: Option<Arc<dyn UnreadRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    events: Option<EventBus>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_directory: None,
            conversation_repo: None,
            message_repo: None,
            unread_repo: None,
            jwt_service: None,
            events: None,
        }
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    pub fn conversation_repo(mut self, repo: Arc<dyn ConversationRepository>) -> Self {
        self.conversation_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn unread_repo(mut self, repo: Arc<dyn UnreadRepository>) -> Self {
        self.unread_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_directory
                .ok_or_else(|| ServiceError::validation("user_directory is required"))?,
            self.conversation_repo
                .ok_or_else(|| ServiceError::validation("conversation_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.unread_repo
                .ok_or_else(|| ServiceError::validation("unread_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.events.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
