//! Credential field bounds and sign-up / sign-in form validation.

use crate::validation::FieldErrors;

/// Minimum password length (characters).
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Maximum display name length (characters).
pub const MAX_DISPLAY_NAME_LENGTH: usize = 50;

/// Cheap structural email check: one `@` with non-empty sides and a dot in
/// the domain. Deliverability is the mail provider's problem, not ours.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate a sign-up submission. Returns every field violation at once.
pub fn validate_signup(
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if !is_valid_email(email) {
        errors.push("email", "Invalid email address.");
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        errors.push(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
        );
    }
    let name = display_name.trim();
    if name.is_empty() {
        errors.push("display_name", "Display name is required.");
    } else if name.len() > MAX_DISPLAY_NAME_LENGTH {
        errors.push(
            "display_name",
            format!("Display name must be at most {MAX_DISPLAY_NAME_LENGTH} characters."),
        );
    }
    errors.into_result()
}

/// Validate a sign-in submission.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if !is_valid_email(email) {
        errors.push("email", "Invalid email address.");
    }
    if password.is_empty() {
        errors.push("password", "Password is required.");
    }
    errors.into_result()
}
