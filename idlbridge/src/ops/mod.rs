//! Core operations.
//!
//! This module contains the business logic for idlbridge commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod outputs;

pub use check::check;
pub use generate::generate;
pub use outputs::outputs;
