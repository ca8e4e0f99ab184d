//! # Registrar Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: the [`Course`](models::course::Course) and
//!   [`Student`](models::student::Student) entities and the rules they enforce.
//! * **[`error`]**: the [`RegistrationError`](error::RegistrationError) taxonomy.
//! * **[`config`]**: runtime options collected from the command line.

pub mod config;
pub mod error;
pub mod models;
