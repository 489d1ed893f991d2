//! Handlers for the `/tasks` resource.
//!
//! Completion accounting lives here: status transitions detected across the
//! persisted update drive the assignee's aggregate stat adjustments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use opsboard_core::departments::is_valid_department;
use opsboard_core::error::CoreError;
use opsboard_core::lifecycle::{
    can_delete_task, can_update_task, completes, is_valid_priority, is_valid_status,
    points_for_priority, PRIORITY_LOW, STATUS_COMPLETED, STATUS_PENDING,
};
use opsboard_core::types::{DbId, Timestamp};
use opsboard_db::models::task::{
    CreateTask, Task, TaskFilter, TaskScope, TaskStats, TaskWithNames, UpdateTask,
};
use opsboard_db::repositories::{TaskRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/tasks`.
///
/// `assigned_by` is deliberately absent: the assigner is always the caller.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub department: String,
    pub assigned_to_id: DbId,
    pub deadline: Option<Timestamp>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The visibility scope for a caller: admins see everything, employees see
/// their department's tasks plus their own assignments.
fn scope_for(caller: &AuthUser) -> TaskScope<'_> {
    if caller.is_admin() {
        TaskScope::All
    } else {
        TaskScope::Caller {
            department: &caller.department,
            user_id: caller.id,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/tasks
///
/// List tasks visible to the caller, narrowed by optional filters.
pub async fn list(
    State(state): State<AppState>,
    caller: AuthUser,
    Query(filter): Query<TaskFilter>,
) -> AppResult<Json<Vec<TaskWithNames>>> {
    let tasks = TaskRepo::list(&state.pool, scope_for(&caller), &filter).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
///
/// Create a task. Any authenticated caller may create; the assigner is
/// forced to the caller and points are derived from priority, once.
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if !is_valid_department(&input.department) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown department: {}",
            input.department
        ))));
    }

    let status = input.status.unwrap_or_else(|| STATUS_PENDING.to_string());
    if !is_valid_status(&status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown status: {status}"
        ))));
    }

    // Unknown priorities are accepted for scoring (they fall back to the Low
    // value) but rejected at the API boundary to keep stored data clean.
    let priority = input.priority.unwrap_or_else(|| PRIORITY_LOW.to_string());
    if !is_valid_priority(&priority) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown priority: {priority}"
        ))));
    }

    // The assignee must exist; tasks reference users by stable id.
    UserRepo::find_by_id(&state.pool, input.assigned_to_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.assigned_to_id,
        }))?;

    let points = points_for_priority(&priority);
    let create = CreateTask {
        title: input.title.trim().to_string(),
        description: input.description,
        department: input.department,
        assigned_by_id: caller.id,
        assigned_to_id: input.assigned_to_id,
        deadline: input.deadline,
        priority,
        status,
        points,
        assigned_at: input.assigned_at,
    };
    let task = TaskRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
///
/// Merge the provided fields onto the task. A transition into Completed
/// credits the assignee exactly once; points stay frozen even when the
/// priority changes.
pub async fn update(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    if !can_update_task(&caller.role, caller.id, task.assigned_to_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only update tasks assigned to you".into(),
        )));
    }

    if let Some(ref status) = input.status {
        if !is_valid_status(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown status: {status}"
            ))));
        }
    }
    if let Some(ref priority) = input.priority {
        if !is_valid_priority(priority) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown priority: {priority}"
            ))));
        }
    }
    if let Some(ref department) = input.department {
        if !is_valid_department(department) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown department: {department}"
            ))));
        }
    }
    if let Some(assigned_to_id) = input.assigned_to_id {
        UserRepo::find_by_id(&state.pool, assigned_to_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: assigned_to_id,
            }))?;
    }

    // Capture the status before the merge; the comparison after persisting
    // decides whether this save is the completion transition.
    let status_before = task.status.clone();

    let updated = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    if completes(&status_before, &updated.status) {
        UserRepo::apply_completion(&state.pool, updated.assigned_to_id, updated.points).await?;
    }

    Ok(Json(updated))
}

/// DELETE /api/tasks/{id}
///
/// Remove a task. Deleting a Completed task rolls back the assignee's
/// completed-task count and points; streak is left as-is.
pub async fn delete(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    if !can_delete_task(&caller.role, caller.id, task.assigned_by_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only delete tasks you assigned".into(),
        )));
    }

    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }

    if task.status == STATUS_COMPLETED {
        UserRepo::revert_completion(&state.pool, task.assigned_to_id, task.points).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/tasks/stats/overview
///
/// Aggregate counts, department-scoped for non-admins.
pub async fn stats(
    State(state): State<AppState>,
    caller: AuthUser,
) -> AppResult<Json<TaskStats>> {
    let scope = if caller.is_admin() {
        TaskScope::All
    } else {
        TaskScope::Department(&caller.department)
    };
    let stats = TaskRepo::stats(&state.pool, scope).await?;
    Ok(Json(stats))
}
