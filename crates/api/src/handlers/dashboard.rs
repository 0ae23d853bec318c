//! Handler for the `/dashboard` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validly_db::models::beta_test_offer::BetaTestOffer;
use validly_db::models::idea::Idea;
use validly_db::repositories::{BetaTestOfferRepo, IdeaRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// The caller's own content, newest-first.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub ideas: Vec<Idea>,
    pub beta_test_offers: Vec<BetaTestOffer>,
}

/// GET /api/v1/dashboard
///
/// Everything the signed-in founder manages: their ideas and their
/// beta-test offers.
pub async fn get_dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ideas = IdeaRepo::list_by_founder(&state.pool, auth.user_id).await?;
    let beta_test_offers = BetaTestOfferRepo::list_by_founder(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse {
        data: DashboardResponse {
            ideas,
            beta_test_offers,
        },
    }))
}
