//! Handlers for the `/ideas` resource and its nested comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validly_core::error::CoreError;
use validly_core::types::DbId;
use validly_core::{comment as comment_rules, idea as idea_rules, search};
use validly_db::models::comment::CreateComment;
use validly_db::models::idea::{CreateIdea, Idea, IdeaListParams};
use validly_db::repositories::{CommentRepo, IdeaRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /ideas`.
#[derive(Debug, Deserialize)]
pub struct CreateIdeaRequest {
    pub title: String,
    pub problem: String,
    pub solution: String,
}

/// Request body for `POST /ideas/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

// ---------------------------------------------------------------------------
// POST /ideas
// ---------------------------------------------------------------------------

/// Post a new idea. The founder's id and display name are denormalized from
/// the authenticated user at creation time.
pub async fn create_idea(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    idea_rules::validate(&input.title, &input.problem, &input.solution)?;

    let user = super::require_user(&state.pool, &auth).await?;

    let create = CreateIdea {
        founder_id: user.id,
        founder_name: user.display_name.clone(),
        title: input.title,
        problem: input.problem,
        solution: input.solution,
    };
    let idea = IdeaRepo::create(&state.pool, &create).await?;

    tracing::info!(idea_id = idea.id, founder_id = user.id, "Idea posted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: idea })))
}

// ---------------------------------------------------------------------------
// GET /ideas
// ---------------------------------------------------------------------------

/// List ideas newest-first, optionally filtered by a case-insensitive
/// substring across title, problem, and solution.
pub async fn list_ideas(
    State(state): State<AppState>,
    Query(params): Query<IdeaListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = search::clamp_limit(params.limit, search::DEFAULT_LIST_LIMIT, search::MAX_LIST_LIMIT);
    let offset = search::clamp_offset(params.offset);

    let ideas = match params.q.as_deref() {
        // The filter mirrors the in-browser behavior: load the collection,
        // then narrow it, so a matching idea is never hidden by pagination.
        Some(term) if !term.trim().is_empty() => {
            let all = IdeaRepo::list(&state.pool, search::MAX_LIST_LIMIT, 0).await?;
            all.into_iter()
                .filter(|idea| idea_matches(idea, term))
                .take(limit as usize)
                .collect()
        }
        _ => IdeaRepo::list(&state.pool, limit, offset).await?,
    };

    Ok(Json(DataResponse { data: ideas }))
}

fn idea_matches(idea: &Idea, term: &str) -> bool {
    search::matches_any(&[&idea.title, &idea.problem, &idea.solution], term)
}

// ---------------------------------------------------------------------------
// GET /ideas/:id
// ---------------------------------------------------------------------------

/// Get a single idea by ID.
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let idea = IdeaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))?;

    Ok(Json(DataResponse { data: idea }))
}

// ---------------------------------------------------------------------------
// GET /ideas/:id/comments
// ---------------------------------------------------------------------------

/// List an idea's comments newest-first.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Distinguish "idea gone" (404) from "no comments yet" (empty list).
    IdeaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))?;

    let comments = CommentRepo::list_for_idea(&state.pool, id).await?;
    Ok(Json(DataResponse { data: comments }))
}

// ---------------------------------------------------------------------------
// POST /ideas/:id/comments
// ---------------------------------------------------------------------------

/// Post a comment on an idea. Bumps the idea's `comment_count` in the same
/// transaction as the insert.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let body = comment_rules::validate_body(&input.body)?;

    IdeaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))?;

    let user = super::require_user(&state.pool, &auth).await?;

    let create = CreateComment {
        idea_id: id,
        user_id: user.id,
        user_name: user.display_name.clone(),
        user_avatar: user.photo_url.clone(),
        body: body.to_string(),
    };
    let comment = CommentRepo::create(&state.pool, &create).await?;

    tracing::info!(
        comment_id = comment.id,
        idea_id = id,
        user_id = user.id,
        "Comment posted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
