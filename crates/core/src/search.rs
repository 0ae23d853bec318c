//! List filtering and pagination helpers.
//!
//! This module lives in `core` (zero internal deps) so the filter predicate
//! the API applies is the same pure function the tests exercise.

/// Default number of list results per page.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of list results per page.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a requested page size into `[1, max]`, falling back to `default`.
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    match requested {
        Some(n) if n >= 1 => n.min(max),
        _ => default,
    }
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}

/// Case-insensitive substring match.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether any of `fields` matches `term` case-insensitively.
///
/// An empty or whitespace-only term matches everything, so an absent filter
/// and a cleared filter behave identically.
pub fn matches_any(fields: &[&str], term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|f| contains_ci(f, term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_to_bounds() {
        assert_eq!(clamp_limit(None, 50, 200), 50);
        assert_eq!(clamp_limit(Some(0), 50, 200), 50);
        assert_eq!(clamp_limit(Some(-3), 50, 200), 50);
        assert_eq!(clamp_limit(Some(20), 50, 200), 20);
        assert_eq!(clamp_limit(Some(999), 50, 200), 200);
    }

    #[test]
    fn offset_is_never_negative() {
        assert_eq!(clamp_offset(Some(-1)), 0);
        assert_eq!(clamp_offset(Some(30)), 30);
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(contains_ci("AI Story Generator", "story"));
        assert!(contains_ci("urban farming", "FARM"));
        assert!(!contains_ci("urban farming", "finance"));
    }

    #[test]
    fn any_field_can_match() {
        let fields = ["Beta: Story Generator", "free users want more", "Pro tier"];
        assert!(matches_any(&fields, "pro"));
        assert!(matches_any(&fields, "USERS"));
        assert!(!matches_any(&fields, "blockchain"));
    }

    #[test]
    fn blank_term_matches_everything() {
        assert!(matches_any(&["anything"], ""));
        assert!(matches_any(&["anything"], "   "));
    }
}
