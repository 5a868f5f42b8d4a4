//! Domain models for the Environmental Monitoring Dashboard

mod alert;
mod prediction;
mod reading;
mod report;

pub use alert::*;
pub use prediction::*;
pub use reading::*;
pub use report::*;
