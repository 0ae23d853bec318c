//! HTTP-level integration tests for the `/conversations` endpoints.
//!
//! Covers get-or-create semantics, participant gating, thread ordering, and
//! the inbox view.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_test_user, get_auth, login_token, post_json_auth,
};
use sqlx::PgPool;
use validly_core::types::DbId;

/// Start (or fetch) the conversation between the token's user and a recipient,
/// returning the response status and JSON body.
async fn start_conversation(
    pool: &PgPool,
    token: &str,
    recipient_id: DbId,
) -> (StatusCode, serde_json::Value) {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/conversations",
        serde_json::json!({ "recipient_id": recipient_id }),
        token,
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Get-or-create
// ---------------------------------------------------------------------------

/// The first contact creates the conversation; the second request (from
/// either side) returns the same one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_conversation_is_unique_per_pair(pool: PgPool) {
    let founder = create_test_user(&pool, "alice@example.com", "Alice").await;
    let tester = create_test_user(&pool, "charlie@example.com", "Charlie").await;
    let alice_token = login_token(build_test_app(pool.clone()), "alice@example.com").await;
    let charlie_token = login_token(build_test_app(pool.clone()), "charlie@example.com").await;

    let (status, json) = start_conversation(&pool, &alice_token, tester.id).await;
    assert_eq!(status, StatusCode::CREATED);
    let conversation_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["participants"].as_array().unwrap().len(), 2);

    // Same pair from the other side: no second conversation.
    let (status, json) = start_conversation(&pool, &charlie_token, founder.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"].as_i64().unwrap(), conversation_id);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM conversations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Messaging yourself is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_no_self_conversation(pool: PgPool) {
    let me = create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let (status, _) = start_conversation(&pool, &token, me.id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Messaging a nonexistent user is a 404 on the recipient.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_recipient(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let (status, _) = start_conversation(&pool, &token, 987654).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Thread
// ---------------------------------------------------------------------------

/// Messages append in creation order; the thread view returns them ascending
/// so the newest entry is last (where the client scrolls to).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_thread_orders_messages_ascending(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let tester = create_test_user(&pool, "charlie@example.com", "Charlie").await;
    let alice_token = login_token(build_test_app(pool.clone()), "alice@example.com").await;
    let charlie_token = login_token(build_test_app(pool.clone()), "charlie@example.com").await;

    let (_, json) = start_conversation(&pool, &alice_token, tester.id).await;
    let conversation_id = json["data"]["id"].as_i64().unwrap();
    let messages_uri = format!("/api/v1/conversations/{conversation_id}/messages");

    let exchanges = [
        (&charlie_token, "Hey, I am interested in testing!"),
        (&alice_token, "Great! What interests you?"),
        (&charlie_token, "The personalization aspect."),
    ];
    for (token, text) in exchanges {
        let app = build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            &messages_uri,
            serde_json::json!({ "body": text }),
            token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/conversations/{conversation_id}"),
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let messages = json["data"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["body"], "Hey, I am interested in testing!");
    assert_eq!(messages[2]["body"], "The personalization aspect.");
    assert_eq!(messages[0]["sender_id"], tester.id);
}

/// A message body is trimmed and must be non-empty.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_message_rejected(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let tester = create_test_user(&pool, "charlie@example.com", "Charlie").await;
    let token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let (_, json) = start_conversation(&pool, &token, tester.id).await;
    let conversation_id = json["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "body": "  \n " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Outsiders can neither read a thread nor post into it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_thread_is_participant_only(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let tester = create_test_user(&pool, "charlie@example.com", "Charlie").await;
    create_test_user(&pool, "eve@example.com", "Eve").await;
    let alice_token = login_token(build_test_app(pool.clone()), "alice@example.com").await;
    let eve_token = login_token(build_test_app(pool.clone()), "eve@example.com").await;

    let (_, json) = start_conversation(&pool, &alice_token, tester.id).await;
    let conversation_id = json["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/conversations/{conversation_id}"),
        &eve_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "body": "let me in" }),
        &eve_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Inbox
// ---------------------------------------------------------------------------

/// The inbox shows the other participant and the last message, most
/// recently active conversation first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inbox_view(pool: PgPool) {
    create_test_user(&pool, "alice@example.com", "Alice").await;
    let charlie = create_test_user(&pool, "charlie@example.com", "Charlie Tester").await;
    let dana = create_test_user(&pool, "dana@example.com", "Dana Developer").await;
    let alice_token = login_token(build_test_app(pool.clone()), "alice@example.com").await;

    let (_, json) = start_conversation(&pool, &alice_token, charlie.id).await;
    let charlie_convo = json["data"]["id"].as_i64().unwrap();
    let (_, json) = start_conversation(&pool, &alice_token, dana.id).await;
    let dana_convo = json["data"]["id"].as_i64().unwrap();

    // Message Charlie last: that thread becomes the most recently active.
    let app = build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/v1/conversations/{dana_convo}/messages"),
        serde_json::json!({ "body": "Thanks for applying!" }),
        &alice_token,
    )
    .await;
    let app = build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/v1/conversations/{charlie_convo}/messages"),
        serde_json::json!({ "body": "The beta costs $5. Still interested?" }),
        &alice_token,
    )
    .await;

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/conversations", &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let inbox = json["data"].as_array().unwrap();
    assert_eq!(inbox.len(), 2);

    assert_eq!(inbox[0]["id"].as_i64().unwrap(), charlie_convo);
    assert_eq!(inbox[0]["other_participant"]["display_name"], "Charlie Tester");
    assert_eq!(
        inbox[0]["last_message"]["body"],
        "The beta costs $5. Still interested?"
    );

    assert_eq!(inbox[1]["id"].as_i64().unwrap(), dana_convo);
    assert_eq!(inbox[1]["other_participant"]["display_name"], "Dana Developer");
}
