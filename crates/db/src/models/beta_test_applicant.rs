//! Beta-test applicant entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A row from the `beta_test_applicants` table.
///
/// One row per (offer, tester) pair, enforced by
/// `uq_beta_test_applicants_offer_tester`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BetaTestApplicant {
    pub id: DbId,
    pub offer_id: DbId,
    pub tester_id: DbId,
    pub tester_name: String,
    pub tester_email: Option<String>,
    pub status: String,
    pub applied_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for volunteering as a tester.
pub struct CreateApplicant {
    pub offer_id: DbId,
    pub tester_id: DbId,
    pub tester_name: String,
    pub tester_email: Option<String>,
}
