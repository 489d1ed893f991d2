//! Leaderboard aggregation.

use opsboard_core::roles::ROLE_EMPLOYEE;
use opsboard_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::leaderboard::LeaderboardEntry;

/// Computes the employee leaderboard on demand; no caching layer.
pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Rank every employee by points from Completed tasks assigned to them.
    ///
    /// `completed_since` restricts the aggregation to tasks completed at or
    /// after the cutoff (trailing week/month views); `None` means all time.
    /// Employees with no matching tasks still appear with zeros. Sorted by
    /// points descending, then name ascending so ties are deterministic.
    pub async fn ranking(
        pool: &PgPool,
        completed_since: Option<Timestamp>,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT u.id AS user_id, u.name, u.department, \
                    COALESCE(agg.tasks_completed, 0) AS tasks_completed, \
                    COALESCE(agg.points, 0) AS points \
             FROM users u \
             LEFT JOIN ( \
                 SELECT assigned_to_id, COUNT(*) AS tasks_completed, SUM(points) AS points \
                 FROM tasks \
                 WHERE status = 'Completed' \
                   AND ($2::timestamptz IS NULL OR completed_at >= $2) \
                 GROUP BY assigned_to_id \
             ) agg ON agg.assigned_to_id = u.id \
             WHERE u.role = $1 \
             ORDER BY points DESC, u.name ASC",
        )
        .bind(ROLE_EMPLOYEE)
        .bind(completed_since)
        .fetch_all(pool)
        .await
    }
}
