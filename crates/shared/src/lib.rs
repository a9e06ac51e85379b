//! Shared configuration and errors for Centum.
//!
//! This crate provides the ambient pieces used by the money crate:
//! - Money configuration (minor units per major unit)
//! - Application-wide error types

pub mod config;
pub mod error;

pub use config::{DEFAULT_MAJOR_UNIT_PARTS, MoneyConfig};
pub use error::{AppError, AppResult};
