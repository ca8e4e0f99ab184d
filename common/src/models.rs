//! # Domain Models
//!
//! The two entities of the registrar.
//!
//! * [`course::Course`]: a catalog entry with a fixed number of seats.
//! * [`student::Student`]: a person holding an ordered list of course codes.
//!
//! A student never holds a reference to a course. It stores the course
//! *code*, and whoever owns both tables (the registry) hands the matching
//! [`course::Course`] in when a registration changes.

pub mod course;
pub mod student;
