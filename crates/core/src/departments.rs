//! The fixed set of agency department labels.
//!
//! Departments are a closed vocabulary, not user data: registration, task
//! creation, and profile updates all validate against this list, and
//! `GET /api/users/departments` serves it verbatim.

/// Every department an employee or task may belong to.
pub const DEPARTMENTS: &[&str] = &[
    "Web Development",
    "Graphic Design",
    "Social Media",
    "SEO",
    "Content Writing",
    "Sales",
    "HR",
    "Operations",
];

/// Whether `label` is one of the known department labels (case-sensitive).
pub fn is_valid_department(label: &str) -> bool {
    DEPARTMENTS.contains(&label)
}
