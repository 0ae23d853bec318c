//! Repository for the `ideas` table.

use sqlx::PgPool;
use validly_core::types::DbId;

use crate::models::idea::{CreateIdea, Idea};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, founder_id, founder_name, title, problem, solution, \
                        comment_count, created_at, updated_at";

/// Provides CRUD operations for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert a new idea, returning the created row.
    ///
    /// `comment_count` starts at zero.
    pub async fn create(pool: &PgPool, input: &CreateIdea) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas (founder_id, founder_name, title, problem, solution)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(input.founder_id)
            .bind(&input.founder_name)
            .bind(&input.title)
            .bind(&input.problem)
            .bind(&input.solution)
            .fetch_one(pool)
            .await
    }

    /// Find an idea by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE id = $1");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ideas newest-first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ideas
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List a founder's own ideas newest-first (the dashboard view).
    pub async fn list_by_founder(
        pool: &PgPool,
        founder_id: DbId,
    ) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ideas
             WHERE founder_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(founder_id)
            .fetch_all(pool)
            .await
    }
}
