//! Money error types.

use centum_shared::AppError;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Money-related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Division by a zero divider.
    #[error("Cannot divide money by zero")]
    DivisionByZero,

    /// Allocation into a non-positive number of parts.
    #[error("Cannot allocate money into {0} parts, at least 1 is required")]
    InvalidParts(usize),

    /// Allocation into more parts than can be held in memory.
    #[error("Cannot allocate money into {0} parts, too many parts")]
    TooManyParts(usize),

    /// Major unit made of zero minor units.
    #[error("Major unit parts must be greater than zero, got {0}")]
    InvalidMajorUnitParts(u32),

    /// Result does not fit in a 64-bit minor-unit amount.
    #[error("Amount overflow in {operation}")]
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
    },
}

impl MoneyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidParts(_) => "INVALID_PARTS",
            Self::TooManyParts(_) => "TOO_MANY_PARTS",
            Self::InvalidMajorUnitParts(_) => "INVALID_MAJOR_UNIT_PARTS",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::DivisionByZero
            | MoneyError::InvalidParts(_)
            | MoneyError::TooManyParts(_)
            | MoneyError::InvalidMajorUnitParts(_) => Self::Validation(err.to_string()),
            MoneyError::Overflow { .. } => Self::BusinessRule(err.to_string()),
        }
    }
}
