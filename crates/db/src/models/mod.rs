//! Entity models and DTOs.

pub mod announcement;
pub mod client;
pub mod leaderboard;
pub mod task;
pub mod user;
