pub mod baseline;
pub mod card;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod round;
pub mod scorer;
pub mod simulation;
pub mod store;

pub use error::{PfResult, PuttForgeError};
