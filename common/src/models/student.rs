use crate::error::{RegistrationError, Result};
use crate::models::course::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
    name: String,
    /// Codes of the courses this student holds a seat in, in registration order.
    courses: Vec<String>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registered_courses(&self) -> &[String] {
        &self.courses
    }

    pub fn is_registered(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c == code)
    }

    /// Takes a seat in `course` and records it on the student.
    ///
    /// Nothing changes on either side when the course is full.
    pub fn register_course(&mut self, course: &mut Course) -> Result<()> {
        course.enroll()?;
        self.courses.push(course.code().to_string());
        Ok(())
    }

    /// Gives up the seat in `course`.
    ///
    /// Only the first matching entry is removed. A student that does not hold
    /// `course` gets [`RegistrationError::NotRegistered`] and the course count
    /// is not touched.
    ///
    /// Every held code was counted by [`Course::enroll`], so a held course
    /// always has a seat to release. If a course with the same code but an
    /// empty counter is passed in anyway, [`RegistrationError::NoEnrollment`]
    /// comes back and the entry stays on the schedule.
    pub fn drop_course(&mut self, course: &mut Course) -> Result<()> {
        let Some(pos) = self.courses.iter().position(|c| c == course.code()) else {
            return Err(RegistrationError::NotRegistered {
                student_id: self.id.clone(),
                code: course.code().to_string(),
            });
        };

        // counter first: a refusal here must leave the schedule as it was
        course.drop_student()?;
        self.courses.remove(pos);
        Ok(())
    }
}
