use crate::error::{RegistrationError, Result};

/// A catalog entry with bounded enrollment.
///
/// `enrolled` only moves through [`Course::enroll`] and [`Course::drop_student`],
/// which keep it within `0..=capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    code: String,
    title: String,
    description: String,
    capacity: u32,
    schedule: String,
    enrolled: u32,
}

impl Course {
    /// Creates an empty course. Fails if `capacity` is zero.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
        schedule: impl Into<String>,
    ) -> Result<Self> {
        let code = code.into();
        if capacity == 0 {
            return Err(RegistrationError::InvalidCapacity(code));
        }

        Ok(Self {
            code,
            title: title.into(),
            description: description.into(),
            capacity,
            schedule: schedule.into(),
            enrolled: 0,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn enrolled(&self) -> u32 {
        self.enrolled
    }

    pub fn available_slots(&self) -> u32 {
        self.capacity - self.enrolled
    }

    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }

    /// Takes one seat. A full course is left untouched.
    pub fn enroll(&mut self) -> Result<()> {
        if self.is_full() {
            return Err(RegistrationError::CapacityExceeded {
                code: self.code.clone(),
                capacity: self.capacity,
            });
        }
        self.enrolled += 1;
        Ok(())
    }

    /// Releases one seat. An empty course is left untouched.
    pub fn drop_student(&mut self) -> Result<()> {
        if self.enrolled == 0 {
            return Err(RegistrationError::NoEnrollment(self.code.clone()));
        }
        self.enrolled -= 1;
        Ok(())
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
