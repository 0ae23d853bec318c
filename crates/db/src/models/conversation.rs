//! Conversation entity models.

use serde::Serialize;
use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A row from the `conversations` table.
///
/// `pair_key` is the order-independent participant pair key
/// (`validly_core::conversation::pair_key`); its unique constraint
/// guarantees one conversation per user pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Conversation {
    pub id: DbId,
    pub pair_key: String,
    pub last_message_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `conversation_participants` table.
///
/// Display name and photo are denormalized at conversation creation, which
/// is the participants-map shape the inbox renders from.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConversationParticipant {
    pub id: DbId,
    pub conversation_id: DbId,
    pub user_id: DbId,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one participant of a conversation being created.
pub struct CreateParticipant {
    pub user_id: DbId,
    pub display_name: String,
    pub photo_url: Option<String>,
}
