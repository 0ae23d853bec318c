//! Field-level form validation primitives.
//!
//! Multi-field forms (ideas, beta-test offers, credentials) validate into a
//! [`FieldErrors`] collection so every offending field gets its own message,
//! rendered inline under the field by the client. Single-field rule breaks
//! elsewhere use [`crate::error::CoreError::Validation`].

use serde::Serialize;

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered collection of field violations for one form submission.
///
/// Empty means the input passed every rule. Validators never throw; they
/// accumulate and return the full set so the client can render all inline
/// errors at once.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when no violations were recorded, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Record a violation unless `min <= value.len() <= max`.
///
/// `label` is the human-facing field name used in the message.
pub fn check_length(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    if value.len() < min {
        errors.push(field, format!("{label} must be at least {min} characters."));
    } else if value.len() > max {
        errors.push(field, format!("{label} must be at most {max} characters."));
    }
}
