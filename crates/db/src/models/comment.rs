//! Comment entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub idea_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new comment. The body is expected to be trimmed and
/// validated already (`validly_core::comment::validate_body`).
pub struct CreateComment {
    pub idea_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub body: String,
}
