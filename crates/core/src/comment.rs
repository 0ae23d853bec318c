//! Comment body validation.

use crate::error::CoreError;

/// Maximum length for a comment body (characters).
pub const MAX_BODY_LENGTH: usize = 2000;

/// Validate a comment body: non-empty after trimming, bounded length.
///
/// Returns the trimmed body ready for storage.
pub fn validate_body(body: &str) -> Result<&str, CoreError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Comment text must not be empty".into(),
        ));
    }
    if trimmed.len() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {} characters (got {})",
            MAX_BODY_LENGTH,
            trimmed.len()
        )));
    }
    Ok(trimmed)
}
