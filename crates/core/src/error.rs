//! Domain failure taxonomy.
//!
//! Every rule violation in the dashboard maps to one of these variants; the
//! api crate translates them into HTTP statuses. Variants carry the
//! client-facing message, so handlers decide the wording at the point the
//! rule is enforced.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced row (user, task, announcement, client) does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input broke a domain rule: unknown department, bad status or
    /// priority value, blank required field, weak password.
    #[error("{0}")]
    Validation(String),

    /// The request collides with existing state, e.g. registering a phone
    /// number that already has an account.
    #[error("{0}")]
    Conflict(String),

    /// The caller could not be authenticated.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),
}
