//! User entity model and DTOs.

use opsboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub department: String,
    pub role: String,
    pub password_hash: String,
    pub completed_tasks: i32,
    pub points: i32,
    pub streak: i32,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub department: String,
    pub role: String,
    pub completed_tasks: i32,
    pub points: i32,
    pub streak: i32,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            name: u.name,
            phone: u.phone,
            department: u.department,
            role: u.role,
            completed_tasks: u.completed_tasks,
            points: u.points,
            streak: u.streak,
            last_login_at: u.last_login_at,
            created_at: u.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub phone: String,
    pub department: String,
    pub role: String,
    pub password_hash: String,
}

/// DTO for updating a user's own profile. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub department: Option<String>,
}

/// Per-user task stats for `GET /api/users/profile/{id}/stats`.
#[derive(Debug, Serialize, FromRow)]
pub struct UserTaskStats {
    pub total_assigned: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub pending: i64,
    /// Points from tasks completed inside the requested window.
    pub points_earned: i64,
}
