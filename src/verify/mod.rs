//! Checking single-generation transitions against expected boards

pub mod fixtures;
pub mod validator;

pub use fixtures::{discover_fixtures, verify_fixtures, FixtureCase, FixtureOutcome, FixtureReport};
pub use validator::{CellMismatch, TickValidator, ValidationResult};
