pub mod config;
pub mod display;
pub mod error;
pub mod map;
pub mod metrics;
pub mod persistence;
pub mod store;
pub mod tracker;
pub mod validation;
pub mod workout;

pub use error::{Result, TrackerError};
