//! Repository for the `beta_test_applicants` table.

use sqlx::PgPool;
use validly_core::types::DbId;

use crate::models::beta_test_applicant::{BetaTestApplicant, CreateApplicant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, offer_id, tester_id, tester_name, tester_email, status, \
                        applied_at, created_at, updated_at";

/// Provides CRUD operations for beta-test applicants.
pub struct BetaTestApplicantRepo;

impl BetaTestApplicantRepo {
    /// Insert an applicant and bump the offer's `applicant_count` in one
    /// transaction, returning the created row.
    ///
    /// A duplicate (offer, tester) pair violates
    /// `uq_beta_test_applicants_offer_tester`, the whole transaction rolls
    /// back, and the counter stays untouched.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplicant,
    ) -> Result<BetaTestApplicant, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO beta_test_applicants (offer_id, tester_id, tester_name, tester_email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let applicant = sqlx::query_as::<_, BetaTestApplicant>(&query)
            .bind(input.offer_id)
            .bind(input.tester_id)
            .bind(&input.tester_name)
            .bind(&input.tester_email)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE beta_test_offers SET applicant_count = applicant_count + 1 WHERE id = $1",
        )
        .bind(input.offer_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(applicant)
    }

    /// Find an applicant by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BetaTestApplicant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beta_test_applicants WHERE id = $1");
        sqlx::query_as::<_, BetaTestApplicant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the applicant row for a (offer, tester) pair, if any.
    pub async fn find_by_offer_and_tester(
        pool: &PgPool,
        offer_id: DbId,
        tester_id: DbId,
    ) -> Result<Option<BetaTestApplicant>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM beta_test_applicants WHERE offer_id = $1 AND tester_id = $2");
        sqlx::query_as::<_, BetaTestApplicant>(&query)
            .bind(offer_id)
            .bind(tester_id)
            .fetch_optional(pool)
            .await
    }

    /// List an offer's applicants oldest-first (application order).
    pub async fn list_for_offer(
        pool: &PgPool,
        offer_id: DbId,
    ) -> Result<Vec<BetaTestApplicant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM beta_test_applicants
             WHERE offer_id = $1
             ORDER BY applied_at ASC"
        );
        sqlx::query_as::<_, BetaTestApplicant>(&query)
            .bind(offer_id)
            .fetch_all(pool)
            .await
    }

    /// Update an applicant's status. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<BetaTestApplicant>, sqlx::Error> {
        let query = format!(
            "UPDATE beta_test_applicants SET status = $1 WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BetaTestApplicant>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
