//! Handlers for the `/users` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use opsboard_core::departments::{is_valid_department, DEPARTMENTS};
use opsboard_core::error::CoreError;
use opsboard_core::roles::ROLE_EMPLOYEE;
use opsboard_core::types::{DbId, Timestamp};
use opsboard_db::models::user::{UserResponse, UserTaskStats};
use opsboard_db::repositories::{TaskRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query params for `GET /api/users/profile/{id}/stats`.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Inclusive lower bound on completion time.
    pub start_date: Option<Timestamp>,
    /// Inclusive upper bound on completion time.
    pub end_date: Option<Timestamp>,
}

/// GET /api/users
///
/// List employees (admins are excluded from the roster view).
pub async fn list_employees(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list_by_role(&state.pool, ROLE_EMPLOYEE).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/all
///
/// List every user, admins included. Admin only.
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_caller): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list_all(&state.pool).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/by-department/{department}
pub async fn by_department(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(department): Path<String>,
) -> AppResult<Json<Vec<UserResponse>>> {
    if !is_valid_department(&department) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown department: {department}"
        ))));
    }
    let users = UserRepo::list_by_department(&state.pool, &department).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/departments
///
/// The fixed department label list. Public: the registration form needs it
/// before any account exists.
pub async fn departments() -> Json<Vec<&'static str>> {
    Json(DEPARTMENTS.to_vec())
}

/// GET /api/users/profile/{id}
pub async fn profile(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// GET /api/users/profile/{id}/stats
///
/// Task stats for one user, optionally restricted to a completion window.
pub async fn profile_stats(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<StatsQuery>,
) -> AppResult<Json<UserTaskStats>> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let stats =
        TaskRepo::user_stats(&state.pool, id, params.start_date, params.end_date).await?;
    Ok(Json(stats))
}
