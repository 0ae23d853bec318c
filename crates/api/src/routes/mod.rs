pub mod auth;
pub mod conversations;
pub mod dashboard;
pub mod health;
pub mod ideas;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     create account (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current identity
///
/// /ideas                                           list (public), create
/// /ideas/{id}                                      get
/// /ideas/{id}/comments                             list (public), create
///
/// /beta-tests                                      list (public), create
/// /beta-tests/{id}                                 get
/// /beta-tests/{id}/applicants                      list (founder), volunteer
/// /beta-tests/{id}/applicants/{id}/status          accept/reject (founder)
///
/// /conversations                                   inbox, get-or-create
/// /conversations/{id}                              thread view
/// /conversations/{id}/messages                     send message
///
/// /dashboard                                       caller's ideas + offers
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/ideas", ideas::router())
        .nest("/beta-tests", beta_tests::router())
        .nest("/conversations", conversations::router())
        .nest("/dashboard", dashboard::router())
}
