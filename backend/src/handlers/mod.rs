//! HTTP request handlers for the Environmental Monitoring Dashboard

mod admin;
mod alerts;
mod dashboard;
mod health;
mod predict;
mod readings;
mod reports;

pub use admin::reload_dataset;
pub use alerts::list_alerts;
pub use dashboard::get_dashboard;
pub use health::health_check;
pub use predict::predict_aqi;
pub use readings::list_readings;
pub use reports::list_daily_reports;
