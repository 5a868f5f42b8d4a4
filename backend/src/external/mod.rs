//! External collaborators
//!
//! The server's only external artifact is the pre-trained AQI regression
//! model produced by the `train-model` binary.

mod aqi_model;

pub use aqi_model::{load_model, save_model};
