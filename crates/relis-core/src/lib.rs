//! RELIS Core: shared error type and analytics configuration.

pub mod config;
pub mod error;

pub use config::AnalyticsConfig;
pub use error::{Error, Result};
