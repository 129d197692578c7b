//! HTTP handlers

mod crop;
mod health;
mod soil;

pub use crop::analyze_crop;
pub use health::{health_check, root};
pub use soil::predict_soil;
