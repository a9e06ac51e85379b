//! Core money logic for Centum.
//!
//! This crate contains pure value arithmetic with ZERO I/O dependencies.
//! Amounts are integer minor units (e.g., cents), never floats.
//!
//! # Modules
//!
//! - `money` - The `Money` value type, rounding policy and allocation

pub mod money;

pub use money::{Money, MoneyError, MoneyResult};
