//! Refresh-token session model and DTOs.

use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A session row from the `sessions` table.
///
/// Only the SHA-256 hash of a refresh token is stored so a database leak
/// does not compromise active sessions.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
