//! PostgreSQL implementation of UnreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use inbox_core::{RepoResult, UnreadRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of UnreadRepository
///
/// Reads the counters maintained by the message repository, keeping the
/// badge query free of message-table scans.
#[derive(Clone)]
pub struct PgUnreadRepository {
    pool: PgPool,
}

impl PgUnreadRepository {
    /// Create a new PgUnreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnreadRepository for PgUnreadRepository {
    #[instrument(skip(self))]
    async fn conversation_count(&self, user_id: Uuid, conversation_id: Uuid) -> RepoResult<i64> {
        let result: Option<(i64,)> = sqlx::query_as(
            r"
            SELECT unread_count
            FROM conversation_unread
            WHERE conversation_id = $1 AND user_id = $2
            ",
        )
        .bind(conversation_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map_or(0, |(count,)| count))
    }

    #[instrument(skip(self))]
    async fn total_count(&self, user_id: Uuid) -> RepoResult<i64> {
        let result: (i64,) = sqlx::query_as(
            r"
            SELECT COALESCE(SUM(unread_count), 0)::BIGINT
            FROM conversation_unread
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.0)
    }
}
