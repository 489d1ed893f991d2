//! Request-level access control: authentication and role extractors.

pub mod auth;
pub mod rbac;
