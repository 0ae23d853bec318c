//! Entity models and DTOs.
//!
//! Row structs derive `sqlx::FromRow`; request/response shapes that belong
//! to the HTTP layer live next to their handlers instead.

pub mod beta_test_applicant;
pub mod beta_test_offer;
pub mod comment;
pub mod conversation;
pub mod idea;
pub mod message;
pub mod session;
pub mod user;
