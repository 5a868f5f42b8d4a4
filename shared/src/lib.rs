//! Shared types and models for the Environmental Monitoring Dashboard
//!
//! This crate contains types shared between the backend server, the offline
//! tools (model trainer, date fixer), and the test suites.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
