//! Conversation participant resolution and message validation.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length for a message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Resolve the other participant in a two-party conversation.
///
/// Returns `None` when `me` is not a participant (the caller should treat
/// that as a forbidden access, not an empty thread).
pub fn other_participant(participant_ids: &[DbId], me: DbId) -> Option<DbId> {
    if !participant_ids.contains(&me) {
        return None;
    }
    participant_ids.iter().copied().find(|&id| id != me)
}

/// Canonical key for a participant pair, independent of ordering.
///
/// Stored on the conversation row so a unique constraint guarantees one
/// conversation per pair.
pub fn pair_key(a: DbId, b: DbId) -> String {
    if a <= b {
        format!("{a}:{b}")
    } else {
        format!("{b}:{a}")
    }
}

/// Validate a message body: non-empty after trimming, bounded length.
///
/// Returns the trimmed body ready for storage.
pub fn validate_message_body(body: &str) -> Result<&str, CoreError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Message text must not be empty".into(),
        ));
    }
    if trimmed.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {} characters (got {})",
            MAX_MESSAGE_LENGTH,
            trimmed.len()
        )));
    }
    Ok(trimmed)
}
