use std::fmt;

use thiserror::Error;

/// Which table a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => write!(f, "student"),
            EntityKind::Course => write!(f, "course"),
        }
    }
}

/// Every way a registry operation can fail.
///
/// Lookup failures ([`RegistrationError::NotFound`]) are kept apart from
/// business-rule failures so callers can tell "no such course" from
/// "course is full". None of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("course {code} is full ({capacity} of {capacity} seats taken)")]
    CapacityExceeded { code: String, capacity: u32 },

    #[error("student {student_id} is not registered in {code}")]
    NotRegistered { student_id: String, code: String },

    #[error("course {0} has no enrolled students")]
    NoEnrollment(String),

    #[error("course {0} must have a capacity of at least one seat")]
    InvalidCapacity(String),

    #[error("course code {0} is already in the catalog")]
    DuplicateCourse(String),

    #[error("student ID {0} is already in the registry")]
    DuplicateStudent(String),
}

impl RegistrationError {
    pub fn student_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Student,
            id: id.into(),
        }
    }

    pub fn course_not_found(code: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Course,
            id: code.into(),
        }
    }

    /// `true` for failures caused by an unknown student ID or course code.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
