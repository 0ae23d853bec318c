//! Message entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub conversation_id: DbId,
    pub sender_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for sending a message. The body is expected to be trimmed and
/// validated already (`validly_core::conversation::validate_message_body`).
pub struct CreateMessage {
    pub conversation_id: DbId,
    pub sender_id: DbId,
    pub body: String,
}
