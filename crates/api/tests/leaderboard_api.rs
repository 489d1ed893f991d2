//! HTTP-level tests for the leaderboard ranking and its time windows.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, create_test_user, get_auth, login_token, post_json_auth, put_json_auth};

/// Create a task for `assigned_to_id` and immediately complete it as the
/// assignee. Returns the task id.
async fn complete_task(
    app: axum::Router,
    admin_token: &str,
    assignee_token: &str,
    department: &str,
    assigned_to_id: i64,
    priority: &str,
) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/api/tasks",
        admin_token,
        json!({
            "title": "leaderboard fixture",
            "department": department,
            "assigned_to_id": assigned_to_id,
            "priority": priority,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let task = body_json(response).await;
    let task_id = task["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/api/tasks/{task_id}"),
        assignee_token,
        json!({ "status": "Completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    task_id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ranking_sorts_by_points_descending(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let a = create_test_user(&pool, "Amber", "01000000001", "SEO", "employee").await;
    let b = create_test_user(&pool, "Blake", "01000000002", "SEO", "employee").await;
    let c = create_test_user(&pool, "Casey", "01000000003", "SEO", "employee").await;
    let admin_token = login_token(app.clone(), "Root").await;
    let a_token = login_token(app.clone(), "Amber").await;
    let b_token = login_token(app.clone(), "Blake").await;
    let c_token = login_token(app.clone(), "Casey").await;

    // Amber: 30 + 20 = 50, Blake: 30 + 30 + 20 = 80, Casey: 20.
    complete_task(app.clone(), &admin_token, &a_token, "SEO", a.id, "High").await;
    complete_task(app.clone(), &admin_token, &a_token, "SEO", a.id, "Medium").await;
    complete_task(app.clone(), &admin_token, &b_token, "SEO", b.id, "High").await;
    complete_task(app.clone(), &admin_token, &b_token, "SEO", b.id, "High").await;
    complete_task(app.clone(), &admin_token, &b_token, "SEO", b.id, "Medium").await;
    complete_task(app.clone(), &admin_token, &c_token, "SEO", c.id, "Medium").await;

    let response = get_auth(app, "/api/leaderboard", &a_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "Blake");
    assert_eq!(entries[0]["points"], 80);
    assert_eq!(entries[0]["tasks_completed"], 3);
    assert_eq!(entries[1]["name"], "Amber");
    assert_eq!(entries[1]["points"], 50);
    assert_eq!(entries[2]["name"], "Casey");
    assert_eq!(entries[2]["points"], 20);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn idle_employees_appear_with_zeros_and_admins_do_not(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    create_test_user(&pool, "Amber", "01000000001", "SEO", "employee").await;
    let token = login_token(app.clone(), "Amber").await;

    let response = get_auth(app, "/api/leaderboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Amber");
    assert_eq!(entries[0]["points"], 0);
    assert_eq!(entries[0]["tasks_completed"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn week_window_excludes_older_completions(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Root", "01000000000", "Operations", "admin").await;
    let a = create_test_user(&pool, "Amber", "01000000001", "SEO", "employee").await;
    let admin_token = login_token(app.clone(), "Root").await;
    let a_token = login_token(app.clone(), "Amber").await;

    complete_task(app.clone(), &admin_token, &a_token, "SEO", a.id, "Medium").await;
    let old = complete_task(app.clone(), &admin_token, &a_token, "SEO", a.id, "High").await;

    // Backdate one completion beyond the trailing week.
    sqlx::query("UPDATE tasks SET completed_at = NOW() - INTERVAL '10 days' WHERE id = $1")
        .bind(old)
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(app.clone(), "/api/leaderboard?time_filter=week", &a_token).await;
    let entries = body_json(response).await;
    assert_eq!(entries[0]["points"], 20);
    assert_eq!(entries[0]["tasks_completed"], 1);

    // The backdated task is still inside the trailing month.
    let response = get_auth(app.clone(), "/api/leaderboard?time_filter=month", &a_token).await;
    let entries = body_json(response).await;
    assert_eq!(entries[0]["points"], 50);
    assert_eq!(entries[0]["tasks_completed"], 2);

    // And "all" counts everything.
    let response = get_auth(app, "/api/leaderboard?time_filter=all", &a_token).await;
    let entries = body_json(response).await;
    assert_eq!(entries[0]["points"], 50);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_time_filter_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create_test_user(&pool, "Amber", "01000000001", "SEO", "employee").await;
    let token = login_token(app.clone(), "Amber").await;

    let response = get_auth(app, "/api/leaderboard?time_filter=fortnight", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
