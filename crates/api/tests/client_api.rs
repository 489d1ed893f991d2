//! HTTP-level tests for the `/clients` resource.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_test_user, get_auth, login_token, patch_json_auth,
    post_json_auth,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_manages_clients_employees_read(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let alice = create_test_user(&pool, "Alice", "01000000001", "Sales", "employee").await;
    let admin_token = login_token(app.clone(), "Root").await;
    let emp_token = login_token(app.clone(), "Alice").await;

    // Employee writes are rejected.
    let response = post_json_auth(
        app.clone(),
        "/api/clients",
        &emp_token,
        json!({ "company": "Acme Corp", "contact_name": "Jane Roe" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Admin creates, linking the account to an employee.
    let response = post_json_auth(
        app.clone(),
        "/api/clients",
        &admin_token,
        json!({
            "company": "Acme Corp",
            "contact_name": "Jane Roe",
            "email": "jane@acme.example",
            "assigned_user_id": alice.id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let client = body_json(response).await;
    let client_id = client["id"].as_i64().unwrap();
    assert_eq!(client["company"], "Acme Corp");
    assert_eq!(client["assigned_user_id"], alice.id);

    // Any authenticated user may read.
    let response = get_auth(app.clone(), &format!("/api/clients/{client_id}"), &emp_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), "/api/clients", &emp_token).await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Partial update keeps unspecified fields.
    let response = patch_json_auth(
        app,
        &format!("/api/clients/{client_id}"),
        &admin_token,
        json!({ "notes": "Renewal due in Q4" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let client = body_json(response).await;
    assert_eq!(client["notes"], "Renewal due in Q4");
    assert_eq!(client["email"], "jane@acme.example");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn linking_unknown_user_is_not_found(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let token = login_token(app.clone(), "Root").await;

    let response = post_json_auth(
        app,
        "/api/clients",
        &token,
        json!({
            "company": "Acme Corp",
            "contact_name": "Jane Roe",
            "assigned_user_id": 424242,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_company_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let token = login_token(app.clone(), "Root").await;

    let response = post_json_auth(
        app,
        "/api/clients",
        &token,
        json!({ "company": "  ", "contact_name": "Jane Roe" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
