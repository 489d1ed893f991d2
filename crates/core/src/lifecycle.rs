//! Task lifecycle and scoring rules.
//!
//! This module owns the authoritative rules for task state: how a task's
//! point value is derived from its priority, when a status change counts as
//! a completion (and therefore adjusts the assignee's aggregate stats), and
//! who may mutate or delete a task. Handlers and repositories apply these
//! rules; nothing here touches storage.

use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";

/// Every status a task may hold.
pub const STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED];

pub const PRIORITY_LOW: &str = "Low";
pub const PRIORITY_MEDIUM: &str = "Medium";
pub const PRIORITY_HIGH: &str = "High";

/// Every priority a task may hold.
pub const PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Whether `status` is one of the known task statuses.
pub fn is_valid_status(status: &str) -> bool {
    STATUSES.contains(&status)
}

/// Whether `priority` is one of the known task priorities.
pub fn is_valid_priority(priority: &str) -> bool {
    PRIORITIES.contains(&priority)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Point value a task earns on completion, derived from its priority.
///
/// Applied once at task creation and frozen thereafter: editing a task's
/// priority later never recomputes its points. Unrecognized priorities fall
/// back to the Low value.
pub fn points_for_priority(priority: &str) -> i32 {
    match priority {
        PRIORITY_HIGH => 30,
        PRIORITY_MEDIUM => 20,
        PRIORITY_LOW => 10,
        _ => 10,
    }
}

/// Whether a status change is a completion transition.
///
/// True only when the task moves from a non-Completed status into
/// `Completed`. Saving a task that is already Completed is not a transition,
/// so assignee stats are adjusted at most once per completion.
pub fn completes(before: &str, after: &str) -> bool {
    before != STATUS_COMPLETED && after == STATUS_COMPLETED
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// Whether `role`/`caller_id` may update a task assigned to `assigned_to_id`.
///
/// Admins may update any task; employees only tasks assigned to them.
pub fn can_update_task(role: &str, caller_id: DbId, assigned_to_id: DbId) -> bool {
    role == ROLE_ADMIN || caller_id == assigned_to_id
}

/// Whether `role`/`caller_id` may delete a task assigned by `assigned_by_id`.
///
/// Admins may delete any task; employees only tasks they assigned.
pub fn can_delete_task(role: &str, caller_id: DbId, assigned_by_id: DbId) -> bool {
    role == ROLE_ADMIN || caller_id == assigned_by_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_EMPLOYEE;

    #[test]
    fn test_points_by_priority() {
        assert_eq!(points_for_priority(PRIORITY_HIGH), 30);
        assert_eq!(points_for_priority(PRIORITY_MEDIUM), 20);
        assert_eq!(points_for_priority(PRIORITY_LOW), 10);
    }

    #[test]
    fn test_unknown_priority_falls_back_to_low() {
        assert_eq!(points_for_priority("Urgent"), 10);
        assert_eq!(points_for_priority(""), 10);
        assert_eq!(points_for_priority("high"), 10);
    }

    #[test]
    fn test_completion_transition() {
        assert!(completes(STATUS_PENDING, STATUS_COMPLETED));
        assert!(completes(STATUS_IN_PROGRESS, STATUS_COMPLETED));
    }

    #[test]
    fn test_resaving_completed_is_not_a_transition() {
        assert!(!completes(STATUS_COMPLETED, STATUS_COMPLETED));
    }

    #[test]
    fn test_leaving_completed_is_not_a_transition() {
        assert!(!completes(STATUS_COMPLETED, STATUS_PENDING));
        assert!(!completes(STATUS_PENDING, STATUS_IN_PROGRESS));
    }

    #[test]
    fn test_update_permissions() {
        // Admins may update anything.
        assert!(can_update_task(ROLE_ADMIN, 1, 2));
        // Employees only their own assignments.
        assert!(can_update_task(ROLE_EMPLOYEE, 2, 2));
        assert!(!can_update_task(ROLE_EMPLOYEE, 1, 2));
    }

    #[test]
    fn test_delete_permissions() {
        assert!(can_delete_task(ROLE_ADMIN, 1, 2));
        assert!(can_delete_task(ROLE_EMPLOYEE, 2, 2));
        assert!(!can_delete_task(ROLE_EMPLOYEE, 1, 2));
    }

    #[test]
    fn test_status_vocabulary() {
        assert!(is_valid_status(STATUS_IN_PROGRESS));
        assert!(!is_valid_status("Done"));
        assert!(is_valid_priority(PRIORITY_MEDIUM));
        assert!(!is_valid_priority("medium"));
    }
}
