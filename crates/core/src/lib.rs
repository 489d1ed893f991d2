//! Domain rules for the Opsboard task dashboard.
//!
//! No I/O lives here: error taxonomy, shared id/timestamp types, the role
//! and department vocabularies, and the task lifecycle & scoring rules.

pub mod departments;
pub mod error;
pub mod lifecycle;
pub mod roles;
pub mod types;
