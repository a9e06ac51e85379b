//! Rounding policy and scaling by decimal factors.
//!
//! CRITICAL: Money rounds by truncation toward zero:
//! - 99.99 → 99
//! - -99.99 → -99
//!
//! This is neither Banker's Rounding nor round-half-up. Every fractional
//! result (construction, `mul`, `div`) passes through [`ROUNDING`].

use rust_decimal::prelude::*;

use super::error::{MoneyError, MoneyResult};
use super::value::Money;

/// Rounding strategy applied to every fractional minor-unit amount.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::ToZero;

impl Money {
    /// Rounds a fractional minor-unit value to a whole number using [`ROUNDING`].
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::round(Decimal::new(9999, 2)).unwrap(), 99);
    /// assert_eq!(Money::round(Decimal::new(-9999, 2)).unwrap(), -99);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the rounded value does not fit in `i64`.
    pub fn round(value: Decimal) -> MoneyResult<i64> {
        value
            .round_dp_with_strategy(0, ROUNDING)
            .to_i64()
            .ok_or(MoneyError::Overflow { operation: "round" })
    }

    /// Multiplies the amount by a decimal factor, then rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    /// use rust_decimal::Decimal;
    ///
    /// // 20% a year on 10,000.00, per day
    /// let rate_per_day = Decimal::new(20, 2) / Decimal::from(365);
    /// let penalty = Money::new(1_000_000).mul(rate_per_day).unwrap();
    /// assert_eq!(penalty, Money::new(547));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the product does not fit in `i64`.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, multiplier: Decimal) -> MoneyResult<Self> {
        let product = Decimal::from(self.amount())
            .checked_mul(multiplier)
            .ok_or(MoneyError::Overflow { operation: "mul" })?;
        Self::round(product).map(Self::new)
    }

    /// Divides the amount by a decimal divider, then rounds.
    ///
    /// The quotient is computed directly, not through a rounded reciprocal.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` if `divider` is zero, or
    /// `MoneyError::Overflow` if the quotient does not fit in `i64`.
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, divider: Decimal) -> MoneyResult<Self> {
        if divider.is_zero() {
            tracing::warn!(amount = self.amount(), "Rejected division of money by zero");
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.amount())
            .checked_div(divider)
            .ok_or(MoneyError::Overflow { operation: "div" })?;
        Self::round(quotient).map(Self::new)
    }
}
