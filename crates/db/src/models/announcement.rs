//! Announcement entity model and DTOs.

use opsboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full announcement row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub message: String,
    pub author_name: String,
    pub priority: String,
    pub is_active: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an announcement. `author_name` is set from the caller.
#[derive(Debug)]
pub struct CreateAnnouncement {
    pub title: String,
    pub message: String,
    pub author_name: String,
    pub priority: String,
    pub expires_at: Option<Timestamp>,
}

/// DTO for updating an announcement. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub message: Option<String>,
    pub priority: Option<String>,
    pub is_active: Option<bool>,
    pub expires_at: Option<Timestamp>,
}
