//! Repository for the `tasks` table.
//!
//! Status-transition side effects (assignee stat adjustments) live in the
//! handlers; this module owns row access, the set-once timestamp stamping,
//! and the visibility-scoped list/aggregate queries.

use opsboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, TaskFilter, TaskScope, TaskStats, TaskWithNames, UpdateTask};
use crate::models::user::UserTaskStats;

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, title, description, department, assigned_by_id, assigned_to_id, \
                        deadline, priority, status, points, assigned_at, started_at, \
                        completed_at, created_at, updated_at";

/// Column list for queries joining assigner/assignee display names.
const NAMED_COLUMNS: &str =
    "t.id, t.title, t.description, t.department, t.assigned_by_id, ub.name AS assigned_by, \
     t.assigned_to_id, ut.name AS assigned_to, t.deadline, t.priority, t.status, t.points, \
     t.assigned_at, t.started_at, t.completed_at, t.created_at, t.updated_at";

const NAME_JOINS: &str =
    "JOIN users ub ON ub.id = t.assigned_by_id JOIN users ut ON ut.id = t.assigned_to_id";

/// Typed bind value for dynamically-built task queries.
enum BindValue {
    BigInt(DbId),
    Text(String),
}

/// Provides CRUD and aggregate operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// `assigned_at` falls back to the insertion time when not supplied.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, department, assigned_by_id, assigned_to_id,
                                deadline, priority, status, points, assigned_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.department)
            .bind(input.assigned_by_id)
            .bind(input.assigned_to_id)
            .bind(input.deadline)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.points)
            .bind(input.assigned_at)
            .fetch_one(pool)
            .await
    }

    /// Find a task by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a task by ID with assigner/assignee names resolved.
    pub async fn find_with_names(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskWithNames>, sqlx::Error> {
        let query = format!("SELECT {NAMED_COLUMNS} FROM tasks t {NAME_JOINS} WHERE t.id = $1");
        sqlx::query_as::<_, TaskWithNames>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks visible under `scope`, narrowed by any explicit filters.
    ///
    /// The scope restriction is applied first; explicit filters are ANDed on
    /// top, so a non-admin caller can never widen their visibility.
    pub async fn list(
        pool: &PgPool,
        scope: TaskScope<'_>,
        filter: &TaskFilter,
    ) -> Result<Vec<TaskWithNames>, sqlx::Error> {
        let (where_clause, bind_values) = build_task_filter(scope, filter);
        let query = format!(
            "SELECT {NAMED_COLUMNS} FROM tasks t {NAME_JOINS} {where_clause} \
             ORDER BY t.created_at DESC"
        );

        let mut q = sqlx::query_as::<_, TaskWithNames>(&query);
        for val in &bind_values {
            q = match val {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v.as_str()),
            };
        }
        q.fetch_all(pool).await
    }

    /// Update a task. Only non-`None` fields in `input` are applied; `points`
    /// is never touched (frozen at creation).
    ///
    /// `started_at`/`completed_at` are stamped in the same statement, only
    /// when still NULL and the effective status enters the matching state, so
    /// re-entering a state can never overwrite the first timestamp.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                department = COALESCE($4, department),
                assigned_to_id = COALESCE($5, assigned_to_id),
                deadline = COALESCE($6, deadline),
                priority = COALESCE($7, priority),
                status = COALESCE($8, status),
                started_at = CASE
                    WHEN started_at IS NULL AND COALESCE($8, status) = 'In Progress' THEN NOW()
                    ELSE started_at
                END,
                completed_at = CASE
                    WHEN completed_at IS NULL AND COALESCE($8, status) = 'Completed' THEN NOW()
                    ELSE completed_at
                END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.department)
            .bind(input.assigned_to_id)
            .bind(input.deadline)
            .bind(&input.priority)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts over the tasks visible under `scope`.
    pub async fn stats(pool: &PgPool, scope: TaskScope<'_>) -> Result<TaskStats, sqlx::Error> {
        let (where_clause, bind_values) = build_task_filter(scope, &TaskFilter::default());
        let query = format!(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE t.status = 'Completed') AS completed, \
                    COUNT(*) FILTER (WHERE t.status = 'Pending') AS pending, \
                    COUNT(*) FILTER (WHERE t.status = 'In Progress') AS in_progress, \
                    COUNT(*) FILTER (WHERE t.priority = 'High') AS high_priority \
             FROM tasks t {where_clause}"
        );

        let mut q = sqlx::query_as::<_, TaskStats>(&query);
        for val in &bind_values {
            q = match val {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v.as_str()),
            };
        }
        q.fetch_one(pool).await
    }

    /// Per-user task stats, optionally restricted to a completion window.
    ///
    /// Assignment counts cover everything currently assigned to the user;
    /// `completed` and `points_earned` honor the `completed_at` window when
    /// bounds are supplied.
    pub async fn user_stats(
        pool: &PgPool,
        user_id: DbId,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<UserTaskStats, sqlx::Error> {
        sqlx::query_as::<_, UserTaskStats>(
            "SELECT COUNT(*) AS total_assigned, \
                    COUNT(*) FILTER (WHERE status = 'Completed' \
                        AND ($2::timestamptz IS NULL OR completed_at >= $2) \
                        AND ($3::timestamptz IS NULL OR completed_at <= $3)) AS completed, \
                    COUNT(*) FILTER (WHERE status = 'In Progress') AS in_progress, \
                    COUNT(*) FILTER (WHERE status = 'Pending') AS pending, \
                    COALESCE(SUM(points) FILTER (WHERE status = 'Completed' \
                        AND ($2::timestamptz IS NULL OR completed_at >= $2) \
                        AND ($3::timestamptz IS NULL OR completed_at <= $3)), 0) AS points_earned \
             FROM tasks WHERE assigned_to_id = $1",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await
    }
}

/// Build a WHERE clause and bind values from the visibility scope plus any
/// explicit filter parameters.
///
/// The `where_clause` is empty if nothing restricts the query, or starts
/// with `WHERE `. Columns are qualified with the `t` alias.
fn build_task_filter(scope: TaskScope<'_>, filter: &TaskFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<BindValue> = Vec::new();

    // Placeholder numbers are derived from the bind list, so every pushed
    // value is numbered correctly no matter which branches run.
    match scope {
        TaskScope::All => {}
        TaskScope::Caller {
            department,
            user_id,
        } => {
            conditions.push(format!(
                "(t.department = ${} OR t.assigned_to_id = ${})",
                bind_values.len() + 1,
                bind_values.len() + 2
            ));
            bind_values.push(BindValue::Text(department.to_string()));
            bind_values.push(BindValue::BigInt(user_id));
        }
        TaskScope::Department(department) => {
            conditions.push(format!("t.department = ${}", bind_values.len() + 1));
            bind_values.push(BindValue::Text(department.to_string()));
        }
    }

    if let Some(ref department) = filter.department {
        conditions.push(format!("t.department = ${}", bind_values.len() + 1));
        bind_values.push(BindValue::Text(department.clone()));
    }

    if let Some(ref status) = filter.status {
        conditions.push(format!("t.status = ${}", bind_values.len() + 1));
        bind_values.push(BindValue::Text(status.clone()));
    }

    if let Some(ref priority) = filter.priority {
        conditions.push(format!("t.priority = ${}", bind_values.len() + 1));
        bind_values.push(BindValue::Text(priority.clone()));
    }

    if let Some(assigned_to) = filter.assigned_to {
        conditions.push(format!("t.assigned_to_id = ${}", bind_values.len() + 1));
        bind_values.push(BindValue::BigInt(assigned_to));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}
