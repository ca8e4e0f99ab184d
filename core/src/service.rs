//! # Registration Service
//!
//! Implements the registrar's use cases on top of a [`Registry`].
//!
//! The service owns the registry for the whole run and is the only writer.
//! Every mutation needs `&mut self`, so registrations against the same course
//! are applied one after another.

use registrar_common::error::Result;
use tracing::debug;

use crate::registry::{CourseSummary, Registry, StudentSchedule};

/// Application Service for course registration.
///
/// Forwards each request to the [`Registry`] and records the outcome at
/// `debug`. A refused request is an ordinary result the caller reports
/// itself, so nothing is logged above `debug`.
pub struct RegistrationService {
    registry: Registry,
}

impl RegistrationService {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.registry.list_courses()
    }

    /// `true` if `student_id` names a known student.
    ///
    /// Lets an interactive caller reject an unknown student before asking for
    /// a course code.
    pub fn student_exists(&self, student_id: &str) -> bool {
        self.registry.student(student_id).is_some()
    }

    pub fn register(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        let result = self.registry.register_student_for_course(student_id, course_code);
        log_outcome("register", student_id, course_code, &result);
        result
    }

    pub fn drop_course(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        let result = self.registry.drop_student_course(student_id, course_code);
        log_outcome("drop", student_id, course_code, &result);
        result
    }

    pub fn schedule(&self, student_id: &str) -> Result<StudentSchedule> {
        self.registry.list_student_courses(student_id).inspect_err(|err| {
            debug!(student = student_id, error = %err, "schedule lookup refused");
        })
    }
}

fn log_outcome(action: &str, student_id: &str, course_code: &str, result: &Result<()>) {
    match result {
        Ok(()) => debug!(action, student = student_id, course = course_code, "enrollment updated"),
        Err(err) => debug!(
            action,
            student = student_id,
            course = course_code,
            not_found = err.is_not_found(),
            error = %err,
            "request refused"
        ),
    }
}
