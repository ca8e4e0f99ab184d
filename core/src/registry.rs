//! # Course Registry
//!
//! The in-memory catalog: course code → [`Course`] and student ID → [`Student`].
//!
//! Both tables are filled once through [`RegistryBuilder`] and never change
//! shape afterwards. Only enrollment state moves, and only through the
//! operations below. Students store course codes, so the registry is the one
//! place that pairs a student with the course it names.

use std::collections::BTreeMap;

use registrar_common::error::{RegistrationError, Result};
use registrar_common::models::course::Course;
use registrar_common::models::student::Student;

/// One row of the course listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub code: String,
    pub title: String,
    pub description: String,
    pub capacity: u32,
    pub enrolled: u32,
    pub available_slots: u32,
    pub schedule: String,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().to_string(),
            title: course.title().to_string(),
            description: course.description().to_string(),
            capacity: course.capacity(),
            enrolled: course.enrolled(),
            available_slots: course.available_slots(),
            schedule: course.schedule().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCourse {
    pub code: String,
    pub title: String,
}

/// A student's registered courses, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSchedule {
    pub student_id: String,
    pub name: String,
    pub courses: Vec<ScheduledCourse>,
}

#[derive(Debug, Default, Clone)]
pub struct Registry {
    courses: BTreeMap<String, Course>,
    students: BTreeMap<String, Student>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// All students, ordered by ID.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Every course in the catalog, ordered by code.
    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.courses.values().map(CourseSummary::from).collect()
    }

    /// Registers `student_id` for `course_code`.
    ///
    /// The student is looked up before the course, so a request naming two
    /// unknown entities reports the student.
    pub fn register_student_for_course(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        let (student, course) = self.lookup_pair(student_id, course_code)?;
        student.register_course(course)
    }

    /// Drops `course_code` from `student_id`'s schedule.
    pub fn drop_student_course(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        let (student, course) = self.lookup_pair(student_id, course_code)?;
        student.drop_course(course)
    }

    pub fn list_student_courses(&self, student_id: &str) -> Result<StudentSchedule> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| RegistrationError::student_not_found(student_id))?;

        let courses = student
            .registered_courses()
            .iter()
            .filter_map(|code| self.courses.get(code))
            .map(|course| ScheduledCourse {
                code: course.code().to_string(),
                title: course.title().to_string(),
            })
            .collect();

        Ok(StudentSchedule {
            student_id: student.id().to_string(),
            name: student.name().to_string(),
            courses,
        })
    }

    fn lookup_pair(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<(&mut Student, &mut Course)> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RegistrationError::student_not_found(student_id))?;
        let course = self
            .courses
            .get_mut(course_code)
            .ok_or_else(|| RegistrationError::course_not_found(course_code))?;
        Ok((student, course))
    }
}

/// Collects courses and students before the registry is sealed.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    courses: BTreeMap<String, Course>,
    students: BTreeMap<String, Student>,
}

impl RegistryBuilder {
    pub fn course(mut self, course: Course) -> Result<Self> {
        if self.courses.contains_key(course.code()) {
            return Err(RegistrationError::DuplicateCourse(course.code().to_string()));
        }
        self.courses.insert(course.code().to_string(), course);
        Ok(self)
    }

    pub fn student(mut self, student: Student) -> Result<Self> {
        if self.students.contains_key(student.id()) {
            return Err(RegistrationError::DuplicateStudent(student.id().to_string()));
        }
        self.students.insert(student.id().to_string(), student);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            courses: self.courses,
            students: self.students,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_common::error::EntityKind;

    fn small_registry() -> Registry {
        Registry::builder()
            .course(Course::new("MA101", "Calculus I", "Introduction to calculus", 1, "TTh 09:00-10:30").unwrap())
            .unwrap()
            .course(Course::new("CS101", "Intro to CS", "Basics", 2, "MWF 10:00-11:00").unwrap())
            .unwrap()
            .student(Student::new("S001", "John Doe"))
            .unwrap()
            .student(Student::new("S002", "Jane Smith"))
            .unwrap()
            .build()
    }

    #[test]
    fn builder_rejects_duplicates() {
        let course = || Course::new("CS101", "Intro", "", 10, "").unwrap();
        let err = Registry::builder().course(course()).unwrap().course(course()).unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateCourse("CS101".into()));

        let err = Registry::builder()
            .student(Student::new("S001", "John Doe"))
            .unwrap()
            .student(Student::new("S001", "Someone Else"))
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateStudent("S001".into()));
    }

    #[test]
    fn courses_are_listed_by_code() {
        let registry = small_registry();
        let codes: Vec<String> = registry.list_courses().into_iter().map(|c| c.code).collect();
        assert_eq!(codes, ["CS101", "MA101"]);
    }

    #[test]
    fn unknown_student_is_reported_before_unknown_course() {
        let mut registry = small_registry();
        let err = registry.register_student_for_course("S999", "XX000").unwrap_err();
        assert_eq!(
            err,
            RegistrationError::NotFound {
                kind: EntityKind::Student,
                id: "S999".into()
            }
        );
    }

    #[test]
    fn unknown_course_is_reported() {
        let mut registry = small_registry();
        let err = registry.drop_student_course("S001", "XX000").unwrap_err();
        assert_eq!(err, RegistrationError::course_not_found("XX000"));
    }

    #[test]
    fn summary_reflects_enrollment() {
        let mut registry = small_registry();
        registry.register_student_for_course("S001", "CS101").unwrap();

        let summary = registry
            .list_courses()
            .into_iter()
            .find(|c| c.code == "CS101")
            .unwrap();
        assert_eq!(summary.enrolled, 1);
        assert_eq!(summary.available_slots, 1);
        assert_eq!(summary.capacity, 2);
    }

    #[test]
    fn schedule_keeps_registration_order() {
        let mut registry = small_registry();
        registry.register_student_for_course("S002", "MA101").unwrap();
        registry.register_student_for_course("S002", "CS101").unwrap();

        let schedule = registry.list_student_courses("S002").unwrap();
        assert_eq!(schedule.name, "Jane Smith");
        let codes: Vec<&str> = schedule.courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["MA101", "CS101"]);
        assert_eq!(schedule.courses[0].title, "Calculus I");
    }

    #[test]
    fn full_course_rejects_next_student() {
        let mut registry = small_registry();
        registry.register_student_for_course("S001", "MA101").unwrap();

        let err = registry.register_student_for_course("S002", "MA101").unwrap_err();
        assert!(matches!(err, RegistrationError::CapacityExceeded { .. }));
        assert_eq!(registry.course("MA101").unwrap().enrolled(), 1);
        assert!(registry.student("S002").unwrap().registered_courses().is_empty());
    }
}
