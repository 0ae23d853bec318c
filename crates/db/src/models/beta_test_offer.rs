//! Beta-test offer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validly_core::types::{DbId, Timestamp};

/// A row from the `beta_test_offers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BetaTestOffer {
    pub id: DbId,
    pub founder_id: DbId,
    pub founder_name: String,
    /// Optional link back to the idea this MVP grew out of.
    pub idea_id: Option<DbId>,
    pub title: String,
    pub mvp_problem: String,
    pub mvp_solution: String,
    /// Free text ("Free", "$5 one-time", "Feedback call").
    pub price: String,
    pub applicant_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new beta-test offer.
pub struct CreateBetaTestOffer {
    pub founder_id: DbId,
    pub founder_name: String,
    pub idea_id: Option<DbId>,
    pub title: String,
    pub mvp_problem: String,
    pub mvp_solution: String,
    pub price: String,
}

/// Query parameters for listing beta-test offers.
#[derive(Debug, Deserialize)]
pub struct OfferListParams {
    /// Case-insensitive substring filter across title/problem/solution.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
