//! HTTP handlers, one module per resource.

pub mod announcements;
pub mod auth;
pub mod clients;
pub mod leaderboard;
pub mod tasks;
pub mod users;
