#![cfg(test)]
use registrar_common::error::{EntityKind, RegistrationError};
use registrar_core::registry::Registry;
use registrar_core::service::RegistrationService;

fn seeded() -> Registry {
    Registry::with_seed_data().expect("seed data is valid")
}

#[test]
fn first_registration_into_cs101() -> anyhow::Result<()> {
    let mut registry = seeded();

    registry.register_student_for_course("S001", "CS101")?;

    assert_eq!(registry.course("CS101").unwrap().enrolled(), 1);
    let schedule = registry.list_student_courses("S001")?;
    let codes: Vec<&str> = schedule.courses.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["CS101"]);
    Ok(())
}

#[test]
fn drop_without_registration_fails() {
    let mut registry = seeded();

    let result = registry.drop_student_course("S001", "CS101");

    assert!(matches!(result, Err(RegistrationError::NotRegistered { .. })));
    assert_eq!(registry.course("CS101").unwrap().enrolled(), 0);
    assert!(registry.student("S001").unwrap().registered_courses().is_empty());
}

#[test]
fn unknown_student_in_every_operation() {
    let mut registry = seeded();
    let expected = RegistrationError::NotFound {
        kind: EntityKind::Student,
        id: "S999".into(),
    };

    assert_eq!(registry.register_student_for_course("S999", "CS101"), Err(expected.clone()));
    assert_eq!(registry.drop_student_course("S999", "CS101"), Err(expected.clone()));
    assert_eq!(registry.list_student_courses("S999"), Err(expected));
}

#[test]
fn unknown_course_in_mutations() {
    let mut registry = seeded();
    let expected = RegistrationError::course_not_found("BIO200");

    assert_eq!(registry.register_student_for_course("S002", "BIO200"), Err(expected.clone()));
    assert_eq!(registry.drop_student_course("S002", "BIO200"), Err(expected));
}

#[test]
fn register_then_drop_restores_state() -> anyhow::Result<()> {
    let mut registry = seeded();
    registry.register_student_for_course("S003", "MA101")?;
    let before_courses = registry.list_courses();
    let before_schedule = registry.list_student_courses("S003")?;

    registry.register_student_for_course("S003", "PH101")?;
    assert_eq!(registry.course("PH101").unwrap().enrolled(), 1);
    registry.drop_student_course("S003", "PH101")?;

    assert_eq!(registry.list_courses(), before_courses);
    assert_eq!(registry.list_student_courses("S003")?, before_schedule);
    Ok(())
}

#[test]
fn schedule_follows_registration_order() -> anyhow::Result<()> {
    let mut service = RegistrationService::new(seeded());

    service.register("S002", "PH101")?;
    service.register("S002", "CS101")?;
    service.register("S002", "MA101")?;
    service.drop_course("S002", "CS101")?;

    let schedule = service.schedule("S002")?;
    assert_eq!(schedule.name, "Jane Smith");
    let lines: Vec<String> = schedule
        .courses
        .iter()
        .map(|c| format!("{} - {}", c.code, c.title))
        .collect();
    assert_eq!(lines, ["PH101 - Physics I", "MA101 - Calculus I"]);
    Ok(())
}

#[test]
fn listing_reports_every_field() {
    let mut registry = seeded();
    registry.register_student_for_course("S001", "PH101").unwrap();
    registry.register_student_for_course("S002", "PH101").unwrap();

    let courses = registry.list_courses();
    let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["CS101", "MA101", "PH101"]);

    let physics = &courses[2];
    assert_eq!(physics.title, "Physics I");
    assert_eq!(physics.description, "Fundamentals of physics");
    assert_eq!(physics.schedule, "MWF 11:00-12:00");
    assert_eq!(physics.capacity, 20);
    assert_eq!(physics.enrolled, 2);
    assert_eq!(physics.available_slots, 18);
}
