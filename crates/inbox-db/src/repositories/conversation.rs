//! PostgreSQL implementation of ConversationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use inbox_core::{pair_key, Conversation, ConversationRepository, PageQuery, Participant, RepoResult};

use crate::mappers::{ConversationInsert, ParticipantInsert};
use crate::models::{ConversationModel, ParticipantModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ConversationRepository
#[derive(Clone)]
pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    /// Create a new PgConversationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One transactional attempt at inserting the conversation with both
    /// participant rows and their zeroed unread counters.
    async fn insert_private(
        &self,
        conversation: &Conversation,
        participants: &[Participant; 2],
        key: &str,
    ) -> Result<(), sqlx::Error> {
        let insert = ConversationInsert::new(conversation);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r"
            INSERT INTO conversations (id, kind, status, created_by, pair_key, created_at)
            VALUES ($1, $2::conversation_kind, $3::conversation_status, $4, $5, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.kind)
        .bind(insert.status)
        .bind(insert.created_by)
        .bind(key)
        .bind(insert.created_at)
        .execute(&mut *tx)
        .await?;

        for participant in participants {
            let p = ParticipantInsert::new(participant);
            sqlx::query(
                r"
                INSERT INTO conversation_participants (conversation_id, user_id, role, created_at)
                VALUES ($1, $2, $3::participant_role, $4)
                ",
            )
            .bind(p.conversation_id)
            .bind(p.user_id)
            .bind(p.role)
            .bind(p.created_at)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r"
                INSERT INTO conversation_unread (conversation_id, user_id, unread_count)
                VALUES ($1, $2, 0)
                ",
            )
            .bind(p.conversation_id)
            .bind(p.user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Conversation>> {
        let result = sqlx::query_as::<_, ConversationModel>(
            r"
            SELECT id, kind::TEXT as kind, status::TEXT as status, created_by, pair_key, created_at
            FROM conversations
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Conversation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_private_between(&self, a: Uuid, b: Uuid) -> RepoResult<Option<Conversation>> {
        let result = sqlx::query_as::<_, ConversationModel>(
            r"
            SELECT id, kind::TEXT as kind, status::TEXT as status, created_by, pair_key, created_at
            FROM conversations
            WHERE pair_key = $1
            ",
        )
        .bind(pair_key(a, b))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Conversation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid, page: PageQuery) -> RepoResult<Vec<Conversation>> {
        // Conversations with no messages sort by their own creation time.
        let results = sqlx::query_as::<_, ConversationModel>(
            r"
            SELECT c.id, c.kind::TEXT as kind, c.status::TEXT as status, c.created_by,
                   c.pair_key, c.created_at
            FROM conversations c
            JOIN conversation_participants p ON p.conversation_id = c.id
            LEFT JOIN LATERAL (
                SELECT MAX(m.created_at) AS last_message_at
                FROM messages m
                WHERE m.conversation_id = c.id
            ) lm ON TRUE
            WHERE p.user_id = $1
            ORDER BY COALESCE(lm.last_message_at, c.created_at) DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Conversation::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create_private(
        &self,
        conversation: &Conversation,
        participants: &[Participant; 2],
    ) -> RepoResult<Conversation> {
        let key = pair_key(participants[0].user_id, participants[1].user_id);

        let mut first_attempt = true;
        loop {
            match self.insert_private(conversation, participants, &key).await {
                Ok(()) => return Ok(conversation.clone()),
                Err(e) => {
                    let is_unique = e
                        .as_database_error()
                        .is_some_and(sqlx::error::DatabaseError::is_unique_violation);

                    if !is_unique || !first_attempt {
                        return Err(map_db_error(e));
                    }

                    // A concurrent creation for the same pair won the unique
                    // index; hand back the winning row instead of erroring.
                    if let Some(winner) = self
                        .find_private_between(participants[0].user_id, participants[1].user_id)
                        .await?
                    {
                        return Ok(winner);
                    }

                    // The winner aborted between the violation and the
                    // re-read, so the slot is free again. One more insert.
                    first_attempt = false;
                }
            }
        }
    }

    #[instrument(skip(self))]
    async fn participants(&self, conversation_id: Uuid) -> RepoResult<Vec<Participant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT conversation_id, user_id, role::TEXT as role, created_at
            FROM conversation_participants
            WHERE conversation_id = $1
            ORDER BY role
            ",
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Participant::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn is_participant(&self, conversation_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result: Option<(i32,)> = sqlx::query_as(
            r"
            SELECT 1
            FROM conversation_participants
            WHERE conversation_id = $1 AND user_id = $2
            ",
        )
        .bind(conversation_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self))]
    async fn archive(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE conversations
            SET status = 'archived'
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
