//! Route definitions for ideas and their comments.
//!
//! Mounted at `/ideas` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::ideas;
use crate::state::AppState;

/// Idea routes.
///
/// ```text
/// POST   /                  -> create_idea
/// GET    /                  -> list_ideas
/// GET    /{id}              -> get_idea
/// GET    /{id}/comments     -> list_comments
/// POST   /{id}/comments     -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas::list_ideas).post(ideas::create_idea))
        .route("/{id}", get(ideas::get_idea))
        .route(
            "/{id}/comments",
            get(ideas::list_comments).post(ideas::create_comment),
        )
}
