use crate::mprint;
use crate::terminal::{format, print};
use registrar_common::config::Config;
use registrar_core::service::RegistrationService;

pub fn list_courses(service: &RegistrationService, cfg: &Config) {
    let courses = service.list_courses();
    print::header("available courses", cfg.quiet);

    if courses.is_empty() {
        print::failure("The catalog is empty.");
        return;
    }

    for (idx, course) in courses.iter().enumerate() {
        print::course_tree(idx, &course.code, &format::course_to_details(course));
        if idx + 1 != courses.len() {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        let open: u32 = courses.iter().map(|c| c.available_slots).sum();
        print::catalog_summary(courses.len(), open);
    }
}
