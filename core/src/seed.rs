use registrar_common::error::Result;
use registrar_common::models::course::Course;
use registrar_common::models::student::Student;
use tracing::debug;

use crate::registry::Registry;

/// (code, title, description, capacity, schedule)
const COURSES: &[(&str, &str, &str, u32, &str)] = &[
    (
        "CS101",
        "Introduction to Computer Science",
        "Basic concepts of computer science",
        30,
        "MWF 10:00-11:00",
    ),
    ("MA101", "Calculus I", "Introduction to calculus", 25, "TTh 09:00-10:30"),
    ("PH101", "Physics I", "Fundamentals of physics", 20, "MWF 11:00-12:00"),
];

const STUDENTS: &[(&str, &str)] = &[
    ("S001", "John Doe"),
    ("S002", "Jane Smith"),
    ("S003", "Emily Johnson"),
];

impl Registry {
    /// Builds the catalog every run starts from: three courses, three students,
    /// nobody enrolled.
    pub fn with_seed_data() -> Result<Self> {
        let mut builder = Registry::builder();

        for &(code, title, description, capacity, schedule) in COURSES {
            builder = builder.course(Course::new(code, title, description, capacity, schedule)?)?;
        }
        for &(id, name) in STUDENTS {
            builder = builder.student(Student::new(id, name))?;
        }

        debug!(courses = COURSES.len(), students = STUDENTS.len(), "seed data loaded");
        Ok(builder.build())
    }
}
