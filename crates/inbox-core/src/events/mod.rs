//! Domain events

pub mod domain_event;

pub use domain_event::{
    ConversationCreatedEvent, DomainEvent, MessagePostedEvent, MessagesDeliveredEvent,
    MessagesReadEvent,
};
