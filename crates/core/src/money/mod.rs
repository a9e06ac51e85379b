//! Integer minor-unit money.
//!
//! This module implements the `Money` value type:
//! - Construction with truncation toward zero
//! - Comparisons
//! - Checked addition and subtraction (single and list forms)
//! - Multiplication and division by decimal factors
//! - Allocation across N parts in whole major units
//! - The process-wide major unit setting

pub mod allocation;
pub mod error;
pub mod rounding;
pub mod settings;
pub mod value;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use error::{MoneyError, MoneyResult};
pub use rounding::ROUNDING;
pub use value::Money;
