//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod announcement_repo;
pub mod client_repo;
pub mod leaderboard_repo;
pub mod task_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use client_repo::ClientRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
