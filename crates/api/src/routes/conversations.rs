//! Route definitions for conversations and messages.
//!
//! Mounted at `/conversations` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::conversations;
use crate::state::AppState;

/// Conversation routes. All require authentication.
///
/// ```text
/// GET    /                  -> list_conversations (inbox)
/// POST   /                  -> create_conversation (get-or-create by recipient)
/// GET    /{id}              -> get_conversation (thread view)
/// POST   /{id}/messages     -> send_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(conversations::list_conversations).post(conversations::create_conversation),
        )
        .route("/{id}", get(conversations::get_conversation))
        .route("/{id}/messages", post(conversations::send_message))
}
