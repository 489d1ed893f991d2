//! Handlers for the `/announcements` resource. Writes are admin only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use opsboard_core::error::CoreError;
use opsboard_core::types::{DbId, Timestamp};
use opsboard_db::models::announcement::{
    Announcement, CreateAnnouncement, UpdateAnnouncement,
};
use opsboard_db::repositories::AnnouncementRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /api/announcements`.
///
/// The author is always the caller, never taken from the body.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    pub priority: Option<String>,
    pub expires_at: Option<Timestamp>,
}

/// GET /api/announcements
///
/// Active, unexpired announcements, newest first.
pub async fn list(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementRepo::list_active(&state.pool).await?;
    Ok(Json(announcements))
}

/// POST /api/announcements
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Json(input): Json<CreateAnnouncementRequest>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message must not be empty".into(),
        )));
    }

    let create = CreateAnnouncement {
        title: input.title.trim().to_string(),
        message: input.message,
        author_name: caller.name,
        priority: input.priority.unwrap_or_else(|| "Medium".to_string()),
        expires_at: input.expires_at,
    };
    let announcement = AnnouncementRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_caller): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// DELETE /api/announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_caller): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))
    }
}
