//! Repository for the `comments` table.

use sqlx::PgPool;
use validly_core::types::DbId;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, idea_id, user_id, user_name, user_avatar, body, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and bump the idea's `comment_count` in one
    /// transaction, returning the created row.
    ///
    /// If the idea vanishes between the caller's existence check and the
    /// insert, the FK on `idea_id` fails and the whole transaction rolls
    /// back, counter untouched.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO comments (idea_id, user_id, user_name, user_avatar, body)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(input.idea_id)
            .bind(input.user_id)
            .bind(&input.user_name)
            .bind(&input.user_avatar)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE ideas SET comment_count = comment_count + 1 WHERE id = $1")
            .bind(input.idea_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(comment)
    }

    /// List an idea's comments newest-first.
    pub async fn list_for_idea(pool: &PgPool, idea_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE idea_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }
}
