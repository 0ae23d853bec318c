//! Repository for the `beta_test_offers` table.

use sqlx::PgPool;
use validly_core::types::DbId;

use crate::models::beta_test_offer::{BetaTestOffer, CreateBetaTestOffer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, founder_id, founder_name, idea_id, title, mvp_problem, \
                        mvp_solution, price, applicant_count, created_at, updated_at";

/// Provides CRUD operations for beta-test offers.
pub struct BetaTestOfferRepo;

impl BetaTestOfferRepo {
    /// Insert a new offer, returning the created row.
    ///
    /// `applicant_count` starts at zero.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBetaTestOffer,
    ) -> Result<BetaTestOffer, sqlx::Error> {
        let query = format!(
            "INSERT INTO beta_test_offers
                (founder_id, founder_name, idea_id, title, mvp_problem, mvp_solution, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BetaTestOffer>(&query)
            .bind(input.founder_id)
            .bind(&input.founder_name)
            .bind(input.idea_id)
            .bind(&input.title)
            .bind(&input.mvp_problem)
            .bind(&input.mvp_solution)
            .bind(&input.price)
            .fetch_one(pool)
            .await
    }

    /// Find an offer by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BetaTestOffer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beta_test_offers WHERE id = $1");
        sqlx::query_as::<_, BetaTestOffer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List offers newest-first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BetaTestOffer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM beta_test_offers
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, BetaTestOffer>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List a founder's own offers newest-first (the dashboard view).
    pub async fn list_by_founder(
        pool: &PgPool,
        founder_id: DbId,
    ) -> Result<Vec<BetaTestOffer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM beta_test_offers
             WHERE founder_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, BetaTestOffer>(&query)
            .bind(founder_id)
            .fetch_all(pool)
            .await
    }
}
