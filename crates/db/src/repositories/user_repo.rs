//! Repository for the `users` table.

use opsboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, department, role, password_hash, \
                        completed_tasks, points, streak, last_login_at, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, phone, department, role, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.department)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by their phone number (the unique handle).
    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE phone = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// Find a user whose display name OR phone matches `username`.
    ///
    /// Login accepts either handle; both are matched case-sensitively.
    pub async fn find_by_name_or_phone(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE name = $1 OR phone = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all users with the given role, ordered by name.
    pub async fn list_by_role(pool: &PgPool, role: &str) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE role = $1 ORDER BY name ASC");
        sqlx::query_as::<_, User>(&query)
            .bind(role)
            .fetch_all(pool)
            .await
    }

    /// List every user ordered by most recently created first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// List users in a department, ordered by name.
    pub async fn list_by_department(
        pool: &PgPool,
        department: &str,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE department = $1 ORDER BY name ASC");
        sqlx::query_as::<_, User>(&query)
            .bind(department)
            .fetch_all(pool)
            .await
    }

    /// Update a user's profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                department = COALESCE($3, department),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Record a successful login by stamping `last_login_at`.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Apply the completion side effect to the assignee's aggregate stats.
    ///
    /// A single-statement atomic increment, so two tasks completing
    /// concurrently for the same user cannot lose an update.
    pub async fn apply_completion(
        pool: &PgPool,
        id: DbId,
        task_points: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                completed_tasks = completed_tasks + 1,
                points = points + $2,
                streak = streak + 1,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(task_points)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Roll back the completion side effect when a completed task is deleted.
    ///
    /// Streak is deliberately left untouched -- the increment on completion
    /// has no inverse here, matching observed product behavior.
    pub async fn revert_completion(
        pool: &PgPool,
        id: DbId,
        task_points: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                completed_tasks = completed_tasks - 1,
                points = points - $2,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(task_points)
        .execute(pool)
        .await?;
        Ok(())
    }
}
