//! Money value type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are whole minor units (e.g., cents) held in an `i64`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{MoneyError, MoneyResult};

/// Represents a monetary amount in minor units.
///
/// Every operation returns a new value; a `Money` is never mutated in place.
///
/// # Example
///
/// ```
/// use centum_core::Money;
///
/// let total = Money::new(1000).add(Money::new(100)).unwrap();
/// assert!(total.equal(Money::new(1100)));
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    amount: i64,
}

impl Money {
    /// Creates a new Money instance from whole minor units.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self { amount: 0 }
    }

    /// Creates Money from a possibly fractional amount of minor units.
    ///
    /// Fractions are truncated toward zero, so `99.99` becomes `99`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the truncated amount does not fit in `i64`.
    pub fn create(amount: Decimal) -> MoneyResult<Self> {
        Self::round(amount).map(Self::new)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.amount
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.amount < 0
    }

    /// Returns true if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.amount > 0
    }

    /// Returns true if both amounts are equal.
    #[must_use]
    pub const fn equal(self, other: Self) -> bool {
        self.amount == other.amount
    }

    /// Returns true if this amount is less than or equal to `other`.
    #[must_use]
    pub const fn equal_or_less(self, other: Self) -> bool {
        self.amount <= other.amount
    }

    /// Returns true if this amount is greater than or equal to `other`.
    #[must_use]
    pub const fn equal_or_more(self, other: Self) -> bool {
        self.amount >= other.amount
    }

    /// Returns true if this amount is less than `other`.
    #[must_use]
    pub const fn less(self, other: Self) -> bool {
        self.amount < other.amount
    }

    /// Returns true if this amount is greater than `other`.
    #[must_use]
    pub const fn more(self, other: Self) -> bool {
        self.amount > other.amount
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the sum does not fit in `i64`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> MoneyResult<Self> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow { operation: "add" })
    }

    /// Adds every amount in `list` to this one.
    ///
    /// An empty list returns this amount unchanged. The total is computed
    /// exactly before the range check, so the result does not depend on
    /// the order of `list`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the total does not fit in `i64`.
    pub fn add_list<'a, I>(self, list: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let total = i128::from(self.amount) + Self::wide_sum(list);
        Self::narrow(total, "add_list")
    }

    /// Subtracts `other` from this amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the difference does not fit in `i64`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Self) -> MoneyResult<Self> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow { operation: "sub" })
    }

    /// Subtracts the total of `list` from this amount.
    ///
    /// Same as `self.sub(Money::zero().add_list(list)?)` whenever the list
    /// total fits in `i64`; otherwise only the final difference must fit.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the difference does not fit in `i64`.
    pub fn sub_list<'a, I>(self, list: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let total = i128::from(self.amount) - Self::wide_sum(list);
        Self::narrow(total, "sub_list")
    }

    // Cannot overflow: it would take more than 2^64 items.
    fn wide_sum<'a, I>(list: I) -> i128
    where
        I: IntoIterator<Item = &'a Self>,
    {
        list.into_iter().map(|money| i128::from(money.amount)).sum()
    }

    fn narrow(amount: i128, operation: &'static str) -> MoneyResult<Self> {
        i64::try_from(amount)
            .map(Self::new)
            .map_err(|_| MoneyError::Overflow { operation })
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self::new(amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount)
    }
}
