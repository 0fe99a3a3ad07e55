//! Read receipt entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-recipient record of when a specific message was read.
///
/// A receipt exists only for participants other than the sender. A missing
/// row, or a row with `read_at = None`, means unread for that user.
/// `read_at` follows last-write-wins: a repeated mark-read refreshes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadReceipt {
    pub message_id: Uuid,
    pub user_id: Uuid,
    pub read_at: Option<DateTime<Utc>>,
}

impl ReadReceipt {
    /// Create a receipt marked read now
    #[must_use]
    pub fn read_now(message_id: Uuid, user_id: Uuid) -> Self {
        Self {
            message_id,
            user_id,
            read_at: Some(Utc::now()),
        }
    }

    /// Check if the receipt records an actual read
    #[inline]
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
