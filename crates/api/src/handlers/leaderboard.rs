//! Handler for the `/leaderboard` resource.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use opsboard_core::error::CoreError;
use opsboard_db::models::leaderboard::LeaderboardEntry;
use opsboard_db::repositories::LeaderboardRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query params for `GET /api/leaderboard`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// `all` (default), `week` (trailing 7 days), or `month` (trailing 30 days).
    pub time_filter: Option<String>,
}

/// GET /api/leaderboard
///
/// Employees ranked by points from completed tasks, computed on demand.
pub async fn ranking(
    State(state): State<AppState>,
    _caller: AuthUser,
    Query(params): Query<LeaderboardQuery>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let cutoff = match params.time_filter.as_deref() {
        None | Some("all") => None,
        Some("week") => Some(Utc::now() - Duration::days(7)),
        Some("month") => Some(Utc::now() - Duration::days(30)),
        Some(other) => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown time_filter: {other} (expected all, week, or month)"
            ))));
        }
    };

    let entries = LeaderboardRepo::ranking(&state.pool, cutoff).await?;
    Ok(Json(entries))
}
