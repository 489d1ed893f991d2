pub mod announcements;
pub mod auth;
pub mod clients;
pub mod health;
pub mod leaderboard;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                    register (public)
/// /auth/login                       login (public)
/// /auth/me                          caller profile
/// /auth/profile                     update own profile
///
/// /tasks                            list, create
/// /tasks/{id}                       update, delete
/// /tasks/stats/overview             aggregate counts
///
/// /users                            employees
/// /users/all                        every user (admin only)
/// /users/by-department/{department} department roster
/// /users/departments                label list (public)
/// /users/profile/{id}               profile
/// /users/profile/{id}/stats         per-user task stats
///
/// /announcements                    list, create (create admin only)
/// /announcements/{id}               update, delete (admin only)
///
/// /leaderboard                      employee ranking
///
/// /clients                          list, create (create admin only)
/// /clients/{id}                     get, patch (patch admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tasks", tasks::router())
        .nest("/users", users::router())
        .nest("/announcements", announcements::router())
        .nest("/leaderboard", leaderboard::router())
        .nest("/clients", clients::router())
}
