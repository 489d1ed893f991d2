//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_employees))
        .route("/all", get(users::list_all))
        .route("/by-department/{department}", get(users::by_department))
        .route("/departments", get(users::departments))
        .route("/profile/{id}", get(users::profile))
        .route("/profile/{id}/stats", get(users::profile_stats))
}
