//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use inbox_core::{Message, MessageRepository, PageQuery, ReadReceipt, RepoResult};

use crate::mappers::MessageInsert;
use crate::models::{MessageModel, ReadReceiptModel};

use super::error::map_db_error;

const MESSAGE_COLUMNS: &str = "id, conversation_id, sender_id, content, \
     message_type::TEXT as message_type, attachment_url, attachment_name, \
     status::TEXT as status, created_at";

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        let sql = format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1");

        let result = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Message::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_conversation(
        &self,
        conversation_id: Uuid,
        page: PageQuery,
    ) -> RepoResult<Vec<Message>> {
        let sql = format!(
            r"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "
        );

        let results = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(conversation_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results.into_iter().map(Message::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn latest(&self, conversation_id: Uuid) -> RepoResult<Option<Message>> {
        let sql = format!(
            r"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "
        );

        let result = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(conversation_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Message::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        let insert = MessageInsert::new(message);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO messages
                (id, conversation_id, sender_id, content, message_type,
                 attachment_url, attachment_name, status, created_at)
            VALUES ($1, $2, $3, $4, $5::message_type, $6, $7, $8::delivery_status, $9)
            ",
        )
        .bind(insert.id)
        .bind(insert.conversation_id)
        .bind(insert.sender_id)
        .bind(insert.content)
        .bind(insert.message_type)
        .bind(insert.attachment_url)
        .bind(insert.attachment_name)
        .bind(insert.status)
        .bind(insert.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Bump the badge counter of every other participant in the same
        // transaction so the counter never drifts from the message rows.
        sqlx::query(
            r"
            UPDATE conversation_unread
            SET unread_count = unread_count + 1
            WHERE conversation_id = $1 AND user_id <> $2
            ",
        )
        .bind(insert.conversation_id)
        .bind(insert.sender_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_delivered(&self, conversation_id: Uuid, viewer_id: Uuid) -> RepoResult<u64> {
        // Only 'sent' rows advance; 'read' never regresses.
        let result = sqlx::query(
            r"
            UPDATE messages
            SET status = 'delivered'
            WHERE conversation_id = $1 AND sender_id <> $2 AND status = 'sent'
            ",
        )
        .bind(conversation_id)
        .bind(viewer_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, conversation_id: Uuid, viewer_id: Uuid) -> RepoResult<Vec<Uuid>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Snapshot of inbound messages not yet read, taken inside the
        // transaction. Messages posted after this point stay unread.
        let newly_read: Vec<(Uuid,)> = sqlx::query_as(
            r"
            UPDATE messages
            SET status = 'read'
            WHERE conversation_id = $1 AND sender_id <> $2 AND status <> 'read'
            RETURNING id
            ",
        )
        .bind(conversation_id)
        .bind(viewer_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Receipts for the inbound history, last write wins on the
        // timestamp. Repeat views refresh read_at for already-read rows.
        // The status filter keeps a message committed between the snapshot
        // and this statement out of the receipt set: within this
        // transaction such a row is still 'sent'.
        sqlx::query(
            r"
            INSERT INTO read_receipts (message_id, user_id, read_at)
            SELECT m.id, $2, NOW()
            FROM messages m
            WHERE m.conversation_id = $1 AND m.sender_id <> $2 AND m.status = 'read'
            ON CONFLICT (message_id, user_id)
            DO UPDATE SET read_at = EXCLUDED.read_at
            ",
        )
        .bind(conversation_id)
        .bind(viewer_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Decrement by the newly-read count rather than resetting to zero,
        // so a message posted concurrently keeps its unread credit.
        let read_count = i64::try_from(newly_read.len()).unwrap_or(i64::MAX);
        sqlx::query(
            r"
            UPDATE conversation_unread
            SET unread_count = GREATEST(unread_count - $3, 0)
            WHERE conversation_id = $1 AND user_id = $2
            ",
        )
        .bind(conversation_id)
        .bind(viewer_id)
        .bind(read_count)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(newly_read.into_iter().map(|(id,)| id).collect())
    }

    #[instrument(skip(self))]
    async fn receipt(&self, message_id: Uuid, user_id: Uuid) -> RepoResult<Option<ReadReceipt>> {
        let result = sqlx::query_as::<_, ReadReceiptModel>(
            r"
            SELECT message_id, user_id, read_at
            FROM read_receipts
            WHERE message_id = $1 AND user_id = $2
            ",
        )
        .bind(message_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReadReceipt::from))
    }
}
