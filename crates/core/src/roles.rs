//! Well-known role name constants.
//!
//! These must match the seed/registration defaults in the `users` table.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EMPLOYEE: &str = "employee";
