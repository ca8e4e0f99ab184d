//! # Registrar Core
//!
//! Owns the catalog tables and the use cases run against them.
//!
//! * **[`registry`]**: the two lookup tables and the four catalog operations.
//! * **[`seed`]**: the fixture data loaded at startup.
//! * **[`service`]**: the application service the CLI drives.

pub mod registry;
pub mod seed;
pub mod service;
