//! Task entity model and DTOs.

use opsboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub department: String,
    pub assigned_by_id: DbId,
    pub assigned_to_id: DbId,
    pub deadline: Option<Timestamp>,
    pub priority: String,
    pub status: String,
    /// Derived from priority at creation; frozen thereafter.
    pub points: i32,
    pub assigned_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Task row with assigner/assignee display names resolved by join.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskWithNames {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub department: String,
    pub assigned_by_id: DbId,
    pub assigned_by: String,
    pub assigned_to_id: DbId,
    pub assigned_to: String,
    pub deadline: Option<Timestamp>,
    pub priority: String,
    pub status: String,
    pub points: i32,
    pub assigned_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new task. `points` is computed by the caller from
/// priority; `assigned_by_id` is always the authenticated caller.
#[derive(Debug)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub department: String,
    pub assigned_by_id: DbId,
    pub assigned_to_id: DbId,
    pub deadline: Option<Timestamp>,
    pub priority: String,
    pub status: String,
    pub points: i32,
    pub assigned_at: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional; `points` is
/// deliberately absent (frozen at creation).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub assigned_to_id: Option<DbId>,
    pub deadline: Option<Timestamp>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// Explicit list filters, ANDed on top of the caller's visibility scope.
#[derive(Debug, Default, Deserialize)]
pub struct TaskFilter {
    pub department: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<DbId>,
}

/// Visibility scope applied before explicit filters.
///
/// Non-admin callers only see tasks in their department or assigned to them.
#[derive(Debug, Clone, Copy)]
pub enum TaskScope<'a> {
    /// Admins see everything.
    All,
    /// Department match OR direct assignment (task lists).
    Caller { department: &'a str, user_id: DbId },
    /// Department match only (aggregate stats).
    Department(&'a str),
}

/// Aggregate counts for `GET /api/tasks/stats/overview`.
#[derive(Debug, Serialize, FromRow)]
pub struct TaskStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub high_priority: i64,
}
