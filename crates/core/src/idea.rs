//! Idea field bounds and form validation.

use crate::validation::{check_length, FieldErrors};

pub const TITLE_MIN: usize = 5;
pub const TITLE_MAX: usize = 100;
pub const PROBLEM_MIN: usize = 20;
pub const PROBLEM_MAX: usize = 1000;
pub const SOLUTION_MIN: usize = 20;
pub const SOLUTION_MAX: usize = 1000;

/// Validate a new idea submission. Returns every field violation at once.
pub fn validate(title: &str, problem: &str, solution: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_length(&mut errors, "title", "Title", title, TITLE_MIN, TITLE_MAX);
    check_length(
        &mut errors,
        "problem",
        "Problem description",
        problem,
        PROBLEM_MIN,
        PROBLEM_MAX,
    );
    check_length(
        &mut errors,
        "solution",
        "Solution description",
        solution,
        SOLUTION_MIN,
        SOLUTION_MAX,
    );
    errors.into_result()
}
