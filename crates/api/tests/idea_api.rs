//! HTTP-level integration tests for the `/ideas` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_test_user, get, login_token, post_json_auth, post_json,
};
use sqlx::PgPool;

/// Valid idea payload helper.
fn idea_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "problem": "Parents struggle to find engaging bedtime stories for their children.",
        "solution": "An AI platform that generates personalized stories based on interests.",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Posting an idea denormalizes the founder's id and name onto the row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_idea(pool: PgPool) {
    let user = create_test_user(&pool, "alice@example.com", "Alice Wonderland").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let app = build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/ideas", idea_body("AI Story Generator"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "AI Story Generator");
    assert_eq!(json["data"]["founder_id"], user.id);
    assert_eq!(json["data"]["founder_name"], "Alice Wonderland");
    assert_eq!(json["data"]["comment_count"], 0);
    assert!(json["data"]["id"].as_i64().is_some(), "server assigns the id");
}

/// Without a token the mutation never happens: 401 and no row written.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_idea_requires_auth(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/ideas", idea_body("AI Story Generator")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ideas")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "rejected submission must not write anything");
}

/// A title of length 4 yields a `title` field error; valid fields stay clean.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_idea_field_errors(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let app = build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/ideas", idea_body("abcd"), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1, "only the offending field is reported");
    assert_eq!(fields[0]["field"], "title");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// Lookup by an absent id yields the not-found state, never an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_idea_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

/// Lists are ordered newest-first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_ideas_newest_first(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    for title in ["First posted idea", "Second posted idea", "Third posted idea"] {
        let app = build_test_app(pool.clone());
        let response = post_json_auth(app, "/api/v1/ideas", idea_body(title), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["title"], "Third posted idea");
    assert_eq!(data[2]["title"], "First posted idea");
}

/// The `q` filter matches case-insensitively across title, problem, and
/// solution; a term matching nothing yields an empty list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_ideas_filter(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let app = build_test_app(pool.clone());
    post_json_auth(app, "/api/v1/ideas", idea_body("Urban Farming Kits"), &token).await;
    let app = build_test_app(pool.clone());
    post_json_auth(app, "/api/v1/ideas", idea_body("Language Chatbot"), &token).await;

    // Case-insensitive title match.
    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/ideas?q=FARMING").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Urban Farming Kits");

    // Match against the problem text, which both fixtures share.
    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/ideas?q=bedtime").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // No match: empty result, still a 200.
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ideas?q=blockchain").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Posting a comment grows the list by one, newest-first, and bumps the
/// idea's comment_count.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_flow(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let commenter = create_test_user(&pool, "bob@example.com", "Bob").await;
    let founder_token = login_token(build_test_app(pool.clone()), "alice@example.com").await;
    let bob_token = login_token(build_test_app(pool.clone()), "bob@example.com").await;

    let app = build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/ideas", idea_body("AI Story Generator"), &founder_token)
            .await;
    let idea_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    for text in ["Sounds amazing!", "How do you ensure age-appropriateness?"] {
        let app = build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            &format!("/api/v1/ideas/{idea_id}/comments"),
            serde_json::json!({ "body": text }),
            &bob_token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/ideas/{idea_id}/comments")).await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["body"], "How do you ensure age-appropriateness?");
    assert_eq!(data[0]["user_id"], commenter.id);
    assert_eq!(data[0]["user_name"], "Bob");

    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/ideas/{idea_id}")).await).await;
    assert_eq!(json["data"]["comment_count"], 2);
}

/// A whitespace-only comment is rejected before touching the database.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_comment_rejected(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let app = build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/ideas", idea_body("AI Story Generator"), &token).await;
    let idea_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/ideas/{idea_id}/comments"),
        serde_json::json!({ "body": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Commenting on a missing idea is a 404, not a silent insert.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_on_missing_idea(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/ideas/424242/comments",
        serde_json::json!({ "body": "into the void" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
