//! The interactive registration menu.
//!
//! Reads one choice per line until `5` or end of input. Every action asks for
//! its arguments on the same input stream and reports the result as a single
//! line. Refused requests never end the loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::commands::courses;
use crate::terminal::{format, print};
use registrar_common::config::Config;
use registrar_common::error::{EntityKind, RegistrationError};
use registrar_core::service::RegistrationService;

const STUDENT_NOT_FOUND: &str = "Student not found.";
const COURSE_NOT_FOUND: &str = "Course not found.";
const REGISTERED: &str = "Student registered for the course successfully.";
const REGISTER_FAILED: &str = "Failed to register student for the course. Course might be full.";
const DROPPED: &str = "Student dropped the course successfully.";
const DROP_FAILED: &str = "Failed to drop the course. Student might not be registered in this course.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const GOODBYE: &str = "Exiting the system. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListCourses,
    Register,
    Drop,
    ListStudentCourses,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::ListCourses,
        MenuChoice::Register,
        MenuChoice::Drop,
        MenuChoice::ListStudentCourses,
        MenuChoice::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuChoice::ListCourses => "List Courses",
            MenuChoice::Register => "Register Student for a Course",
            MenuChoice::Drop => "Drop Course for a Student",
            MenuChoice::ListStudentCourses => "List Student Courses",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ListCourses),
            "2" => Ok(MenuChoice::Register),
            "3" => Ok(MenuChoice::Drop),
            "4" => Ok(MenuChoice::ListStudentCourses),
            "5" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid choice: {other}")),
        }
    }
}

/// Runs the menu on the process's stdin and stdout.
pub fn run(service: &mut RegistrationService, cfg: &Config) -> anyhow::Result<()> {
    Menu::new(service, cfg, io::stdin().lock(), io::stdout()).run()
}

pub struct Menu<'a, R, W> {
    service: &'a mut RegistrationService,
    cfg: &'a Config,
    input: R,
    prompt_out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a mut RegistrationService, cfg: &'a Config, input: R, prompt_out: W) -> Self {
        Self {
            service,
            cfg,
            input,
            prompt_out,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu();
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::ListCourses) => courses::list_courses(self.service, self.cfg),
                Ok(MenuChoice::Register) => self.register()?,
                Ok(MenuChoice::Drop) => self.drop_course()?,
                Ok(MenuChoice::ListStudentCourses) => self.list_student_courses()?,
                Ok(MenuChoice::Exit) => break,
                Err(_) => print::failure(INVALID_CHOICE),
            }
        }

        print::success(GOODBYE);
        print::end_of_program();
        Ok(())
    }

    fn show_menu(&self) {
        print::header("course registration system", self.cfg.quiet);
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            print::menu_item(idx + 1, choice.label());
        }
    }

    /// Writes `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{text}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a student ID and checks it before anything else is asked.
    fn prompt_student(&mut self) -> io::Result<Option<String>> {
        let Some(student_id) = self.prompt("Enter Student ID: ")? else {
            return Ok(None);
        };
        if !self.service.student_exists(&student_id) {
            print::failure(STUDENT_NOT_FOUND);
            return Ok(None);
        }
        Ok(Some(student_id))
    }

    fn register(&mut self) -> io::Result<()> {
        let Some(student_id) = self.prompt_student()? else {
            return Ok(());
        };
        let Some(course_code) = self.prompt("Enter Course Code: ")? else {
            return Ok(());
        };

        let result = self.service.register(&student_id, &course_code);
        report(outcome(&result, REGISTERED, REGISTER_FAILED));
        Ok(())
    }

    fn drop_course(&mut self) -> io::Result<()> {
        let Some(student_id) = self.prompt_student()? else {
            return Ok(());
        };
        let Some(course_code) = self.prompt("Enter Course Code: ")? else {
            return Ok(());
        };

        let result = self.service.drop_course(&student_id, &course_code);
        report(outcome(&result, DROPPED, DROP_FAILED));
        Ok(())
    }

    fn list_student_courses(&mut self) -> io::Result<()> {
        let Some(student_id) = self.prompt("Enter Student ID: ")? else {
            return Ok(());
        };

        let schedule = match self.service.schedule(&student_id) {
            Ok(schedule) => schedule,
            Err(err) => {
                print::failure(not_found_message(&err).unwrap_or(STUDENT_NOT_FOUND));
                return Ok(());
            }
        };

        print::header(&format!("courses of {}", schedule.student_id), self.cfg.quiet);
        let lines: Vec<String> = schedule.courses.iter().map(format::scheduled_line).collect();
        print::schedule(&schedule.name, &lines);
        Ok(())
    }
}

fn not_found_message(err: &RegistrationError) -> Option<&'static str> {
    match err {
        RegistrationError::NotFound {
            kind: EntityKind::Student,
            ..
        } => Some(STUDENT_NOT_FOUND),
        RegistrationError::NotFound {
            kind: EntityKind::Course,
            ..
        } => Some(COURSE_NOT_FOUND),
        _ => None,
    }
}

/// Picks the line to show for `result`: `Ok` for a success message,
/// `Err` for a failure message.
fn outcome(
    result: &Result<(), RegistrationError>,
    succeeded: &'static str,
    refused: &'static str,
) -> Result<&'static str, &'static str> {
    match result {
        Ok(()) => Ok(succeeded),
        Err(err) => Err(not_found_message(err).unwrap_or(refused)),
    }
}

fn report(message: Result<&str, &str>) {
    match message {
        Ok(msg) => print::success(msg),
        Err(msg) => print::failure(msg),
    }
}
