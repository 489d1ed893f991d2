//! HTTP-level tests for the `/announcements` resource.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_test_user, delete_auth, get_auth, login_token,
    post_json_auth, put_json_auth,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn writes_are_admin_only(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Alice", "01000000001", "Web Development", "employee").await;
    let token = login_token(app.clone(), "Alice").await;

    let response = post_json_auth(
        app,
        "/api/announcements",
        &token,
        json!({ "title": "Notice", "message": "Office closed Friday" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Admin role required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_stamps_author_and_defaults_priority(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let token = login_token(app.clone(), "Root").await;

    let response = post_json_auth(
        app,
        "/api/announcements",
        &token,
        json!({
            "title": "Notice",
            "message": "Office closed Friday",
            // author_name in the body must be ignored, never trusted.
            "author_name": "Impostor",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["author_name"], "Root");
    assert_eq!(body["priority"], "Medium");
    assert_eq!(body["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_shows_only_active_unexpired(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    create_test_user(&pool, "Alice", "01000000001", "Web Development", "employee").await;
    let admin_token = login_token(app.clone(), "Root").await;
    let emp_token = login_token(app.clone(), "Alice").await;

    // Current, expired, and soon-to-be-deactivated announcements.
    post_json_auth(
        app.clone(),
        "/api/announcements",
        &admin_token,
        json!({ "title": "Current", "message": "still valid" }),
    )
    .await;
    post_json_auth(
        app.clone(),
        "/api/announcements",
        &admin_token,
        json!({
            "title": "Expired",
            "message": "long gone",
            "expires_at": "2020-01-01T00:00:00Z",
        }),
    )
    .await;
    let response = post_json_auth(
        app.clone(),
        "/api/announcements",
        &admin_token,
        json!({ "title": "Retracted", "message": "nevermind" }),
    )
    .await;
    let retracted = body_json(response).await;
    let retracted_id = retracted["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/announcements/{retracted_id}"),
        &admin_token,
        json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Employees read the feed; only the current one survives.
    let response = get_auth(app, "/api/announcements", &emp_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Current");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_announcement(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let token = login_token(app.clone(), "Root").await;

    let response = post_json_auth(
        app.clone(),
        "/api/announcements",
        &token,
        json!({ "title": "Temp", "message": "short lived" }),
    )
    .await;
    let body = body_json(response).await;
    let id = body["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/announcements/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is a 404.
    let response = delete_auth(app, &format!("/api/announcements/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
