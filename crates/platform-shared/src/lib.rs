//! # Platform Shared
//!
//! Shared kernel: identifiers, audit metadata, configuration and telemetry.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
