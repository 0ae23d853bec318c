//! Idea entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A row from the `ideas` table.
///
/// The founder's name is denormalized at creation time and never
/// reassigned, matching the ownership model of every content entity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Idea {
    pub id: DbId,
    pub founder_id: DbId,
    pub founder_name: String,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub comment_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new idea.
pub struct CreateIdea {
    pub founder_id: DbId,
    pub founder_name: String,
    pub title: String,
    pub problem: String,
    pub solution: String,
}

/// Query parameters for listing ideas.
#[derive(Debug, Deserialize)]
pub struct IdeaListParams {
    /// Case-insensitive substring filter across title/problem/solution.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
