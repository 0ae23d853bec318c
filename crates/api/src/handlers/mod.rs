//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `validly_db` and map
//! errors via [`crate::error::AppError`].

pub mod auth;
pub mod conversations;
pub mod dashboard;
pub mod ideas;

use sqlx::PgPool;
use validly_core::error::CoreError;
use validly_db::models::user::User;
use validly_db::repositories::UserRepo;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Load the full user row behind an authenticated request.
///
/// Handlers that denormalize the author's name/avatar onto created entities
/// need more than the id in the token. A valid token for a user that no
/// longer exists (or was deactivated) rejects with 401 so the client
/// re-authenticates.
pub(crate) async fn require_user(pool: &PgPool, auth: &AuthUser) -> Result<User, AppError> {
    let user = UserRepo::find_by_id(pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    Ok(user)
}
