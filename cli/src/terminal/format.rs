use crate::terminal::colors;
use colored::*;
use registrar_core::registry::{CourseSummary, ScheduledCourse};

pub type Detail = (String, ColoredString);

/// Red when full, yellow at a fifth of the seats or fewer.
pub fn seats_color(available: u32, capacity: u32) -> Color {
    match available {
        0 => colors::SEATS_NONE,
        n if u64::from(n) * 5 <= u64::from(capacity) => colors::SEATS_LOW,
        _ => colors::SEATS_OPEN,
    }
}

pub fn course_to_details(course: &CourseSummary) -> Vec<Detail> {
    vec![
        ("Title".to_string(), course.title.color(colors::SECONDARY)),
        ("Description".to_string(), course.description.normal()),
        ("Capacity".to_string(), course.capacity.to_string().normal()),
        ("Enrolled".to_string(), course.enrolled.to_string().normal()),
        (
            "Available".to_string(),
            course
                .available_slots
                .to_string()
                .color(seats_color(course.available_slots, course.capacity)),
        ),
        ("Schedule".to_string(), course.schedule.color(colors::ACCENT)),
    ]
}

/// `CODE - Title`, the way a schedule line reads.
pub fn scheduled_line(course: &ScheduledCourse) -> String {
    format!(
        "{} {} {}",
        course.code.color(colors::PRIMARY),
        "-".color(colors::SEPARATOR),
        course.title.color(colors::TEXT_DEFAULT)
    )
}
