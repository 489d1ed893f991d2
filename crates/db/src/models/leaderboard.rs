//! Leaderboard row model.

use opsboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One employee's leaderboard entry.
///
/// `tasks_completed` and `points` are aggregated from Completed tasks
/// assigned to the employee (optionally window-restricted by completion
/// time), not from the cumulative counters on the user row, so the board
/// reflects the selected time window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: DbId,
    pub name: String,
    pub department: String,
    pub tasks_completed: i64,
    pub points: i64,
}
