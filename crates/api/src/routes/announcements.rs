//! Route definitions for the `/announcements` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::announcements;
use crate::state::AppState;

/// Routes mounted at `/announcements`. Writes require the admin role.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcements::list).post(announcements::create))
        .route(
            "/{id}",
            put(announcements::update).delete(announcements::delete),
        )
}
