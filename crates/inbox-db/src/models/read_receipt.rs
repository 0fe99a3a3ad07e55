//! Read receipt database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for read_receipts table
#[derive(Debug, Clone, FromRow)]
pub struct ReadReceiptModel {
    pub message_id: Uuid,
    pub user_id: Uuid,
    pub read_at: DateTime<Utc>,
}
