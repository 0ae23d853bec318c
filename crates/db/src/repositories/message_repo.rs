//! Repository for the `messages` table.

use sqlx::PgPool;
use validly_core::types::DbId;

use crate::models::message::{CreateMessage, Message};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, conversation_id, sender_id, body, created_at, updated_at";

/// Provides CRUD operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a message and update the conversation's `last_message_id` and
    /// `updated_at` in one transaction, returning the created row.
    ///
    /// The conversation bump is what keeps the inbox ordered by most recent
    /// activity.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO messages (conversation_id, sender_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let message = sqlx::query_as::<_, Message>(&query)
            .bind(input.conversation_id)
            .bind(input.sender_id)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE conversations SET last_message_id = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(message.id)
        .bind(input.conversation_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(message)
    }

    /// Find a message by ID (used to hydrate inbox previews).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a conversation's messages ascending by creation time (the
    /// thread ordering).
    pub async fn list_for_conversation(
        pool: &PgPool,
        conversation_id: DbId,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages
             WHERE conversation_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(conversation_id)
            .fetch_all(pool)
            .await
    }
}
