//! Repository for the `conversations` and `conversation_participants` tables.

use sqlx::PgPool;
use validly_core::types::DbId;

use crate::models::conversation::{Conversation, ConversationParticipant, CreateParticipant};

/// Column list for `conversations` queries.
const COLUMNS: &str = "id, pair_key, last_message_id, created_at, updated_at";

/// Column list for `conversation_participants` queries.
const PARTICIPANT_COLUMNS: &str =
    "id, conversation_id, user_id, display_name, photo_url, created_at, updated_at";

/// Provides CRUD operations for conversations.
pub struct ConversationRepo;

impl ConversationRepo {
    /// Insert a conversation with its participants in one transaction,
    /// returning the created row.
    ///
    /// A second conversation for the same pair violates
    /// `uq_conversations_pair_key`; callers resolve the pair first via
    /// [`ConversationRepo::find_by_pair_key`].
    pub async fn create(
        pool: &PgPool,
        pair_key: &str,
        participants: &[CreateParticipant],
    ) -> Result<Conversation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO conversations (pair_key)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        let conversation = sqlx::query_as::<_, Conversation>(&query)
            .bind(pair_key)
            .fetch_one(&mut *tx)
            .await?;

        for participant in participants {
            sqlx::query(
                "INSERT INTO conversation_participants
                    (conversation_id, user_id, display_name, photo_url)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(conversation.id)
            .bind(participant.user_id)
            .bind(&participant.display_name)
            .bind(&participant.photo_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(conversation)
    }

    /// Find a conversation by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conversations WHERE id = $1");
        sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the conversation for a participant pair key, if any.
    pub async fn find_by_pair_key(
        pool: &PgPool,
        pair_key: &str,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conversations WHERE pair_key = $1");
        sqlx::query_as::<_, Conversation>(&query)
            .bind(pair_key)
            .fetch_optional(pool)
            .await
    }

    /// List a user's conversations, most recently active first (the inbox
    /// ordering).
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Conversation>, sqlx::Error> {
        let query = "SELECT c.id, c.pair_key, c.last_message_id, c.created_at, c.updated_at
             FROM conversations c
             JOIN conversation_participants p ON p.conversation_id = c.id
             WHERE p.user_id = $1
             ORDER BY c.updated_at DESC";
        sqlx::query_as::<_, Conversation>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a conversation's participants.
    pub async fn participants(
        pool: &PgPool,
        conversation_id: DbId,
    ) -> Result<Vec<ConversationParticipant>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM conversation_participants
             WHERE conversation_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, ConversationParticipant>(&query)
            .bind(conversation_id)
            .fetch_all(pool)
            .await
    }
}
