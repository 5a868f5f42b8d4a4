//! Presentation-facing services for the Environmental Monitoring Dashboard
//!
//! The alert evaluator and daily aggregator themselves live in `shared`
//! next to their models; these services layer dashboard statistics and
//! model-backed prediction on top of them.

pub mod dashboard;
pub mod prediction;

pub use dashboard::DashboardSummary;
pub use prediction::PredictionService;
