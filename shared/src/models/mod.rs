//! Domain models for the Farmer AI ML service

mod crop;
mod disease;
mod soil;

pub use crop::*;
pub use disease::*;
pub use soil::*;
