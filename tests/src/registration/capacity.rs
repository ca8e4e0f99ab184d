#![cfg(test)]
use registrar_common::error::RegistrationError;
use registrar_common::models::course::Course;
use registrar_common::models::student::Student;
use registrar_core::registry::Registry;

/// A catalog holding the seeded CS101 (30 seats) and enough students to
/// overflow it.
fn crowded_registry(students: usize) -> Registry {
    let course = Course::new(
        "CS101",
        "Introduction to Computer Science",
        "Basic concepts of computer science",
        30,
        "MWF 10:00-11:00",
    )
    .unwrap();

    let mut builder = Registry::builder().course(course).unwrap();
    for n in 1..=students {
        builder = builder
            .student(Student::new(format!("S{n:03}"), format!("Student {n}")))
            .unwrap();
    }
    builder.build()
}

#[test]
fn thirty_first_registration_is_refused() {
    let mut registry = crowded_registry(31);

    for n in 1..=30 {
        let id = format!("S{n:03}");
        assert!(
            registry.register_student_for_course(&id, "CS101").is_ok(),
            "registration {n} should fit"
        );
    }
    assert_eq!(registry.course("CS101").unwrap().enrolled(), 30);

    let result = registry.register_student_for_course("S031", "CS101");

    assert_eq!(
        result,
        Err(RegistrationError::CapacityExceeded {
            code: "CS101".into(),
            capacity: 30
        })
    );
    assert_eq!(registry.course("CS101").unwrap().enrolled(), 30);
    assert_eq!(registry.course("CS101").unwrap().available_slots(), 0);
    assert!(registry.student("S031").unwrap().registered_courses().is_empty());
}

#[test]
fn freed_seat_can_be_taken_again() {
    let mut registry = crowded_registry(31);
    for n in 1..=30 {
        registry.register_student_for_course(&format!("S{n:03}"), "CS101").unwrap();
    }

    registry.drop_student_course("S007", "CS101").unwrap();
    registry.register_student_for_course("S031", "CS101").unwrap();

    assert_eq!(registry.course("CS101").unwrap().enrolled(), 30);
    assert!(registry.student("S031").unwrap().is_registered("CS101"));
    assert!(!registry.student("S007").unwrap().is_registered("CS101"));
}

#[test]
fn enrolled_never_leaves_bounds() {
    let mut registry = crowded_registry(40);

    for n in 1..=40 {
        let id = format!("S{n:03}");
        let _ = registry.register_student_for_course(&id, "CS101");
        if n % 4 == 0 {
            let _ = registry.drop_student_course(&id, "CS101");
        }
        // dropping someone who never got a seat must not release one
        let _ = registry.drop_student_course("S040", "CS101");

        let course = registry.course("CS101").unwrap();
        assert!(course.enrolled() <= course.capacity());

        let holders = registry.students().filter(|s| s.is_registered("CS101")).count();
        assert_eq!(holders as u32, course.enrolled());
    }
}
