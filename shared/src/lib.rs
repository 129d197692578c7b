//! Shared types and models for the Farmer AI ML service
//!
//! This crate contains the domain types, lookup tables and placeholder models
//! shared between the backend and the web frontend (via WASM).

pub mod inference;
pub mod localization;
pub mod models;
pub mod types;
pub mod validation;

pub use inference::*;
pub use localization::*;
pub use models::*;
pub use types::*;
pub use validation::*;
