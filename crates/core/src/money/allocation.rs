//! Allocation of money into parts of whole major units.
//!
//! The amount is first reduced to whole major units (any minor-unit
//! leftover below one major unit is dropped), then:
//! 1. Every part gets `major / parts` major units, truncated
//! 2. The remainder `major - base * parts` is counted
//! 3. The earliest parts get one extra major unit each until it is used up
//!
//! For negative amounts the extra unit is negative, so the parts always sum
//! to the whole-major-unit amount.

use centum_shared::MoneyConfig;

use super::error::{MoneyError, MoneyResult};
use super::value::Money;

/// Allocation utility for splitting minor-unit amounts.
///
/// Guarantees:
/// - Every part holds a whole number of major units
/// - Sum of parts EXACTLY equals the major-unit portion of the total
/// - Parts differ by at most one major unit, larger ones first
pub struct AllocationUtil;

impl AllocationUtil {
    /// Split `amount` minor units into `parts` whole-major-unit amounts.
    ///
    /// # Arguments
    ///
    /// * `amount` - The total in minor units
    /// * `parts` - Number of recipients, at least 1
    /// * `major_unit_parts` - Minor units per major unit, at least 1
    ///
    /// # Returns
    ///
    /// A vector of `parts` minor-unit amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::money::AllocationUtil;
    ///
    /// // 35,000.00 / 3 = [11,667.00, 11,667.00, 11,666.00]
    /// let result = AllocationUtil::allocate_major_units(3_500_000, 3, 100).unwrap();
    /// assert_eq!(result, vec![1_166_700, 1_166_700, 1_166_600]);
    /// ```
    pub fn allocate_major_units(
        amount: i64,
        parts: usize,
        major_unit_parts: u32,
    ) -> MoneyResult<Vec<i64>> {
        if parts == 0 {
            return Err(MoneyError::InvalidParts(parts));
        }
        if major_unit_parts == 0 {
            return Err(MoneyError::InvalidMajorUnitParts(major_unit_parts));
        }

        let unit = i64::from(major_unit_parts);
        let count = i64::try_from(parts).map_err(|_| MoneyError::TooManyParts(parts))?;

        // Integer division truncates toward zero
        let major = amount / unit;
        let base = major / count;
        let remainder = major - base * count;

        // |remainder| < count, so this always fits
        let extra_count = usize::try_from(remainder.unsigned_abs()).unwrap_or(0);
        let extra = remainder.signum();

        let mut allocated = Vec::new();
        allocated
            .try_reserve_exact(parts)
            .map_err(|_| MoneyError::TooManyParts(parts))?;

        // |base + extra| <= |major|, so scaling back cannot overflow
        allocated.extend((0..parts).map(|i| {
            let units = if i < extra_count { base + extra } else { base };
            units * unit
        }));
        Ok(allocated)
    }
}

impl Money {
    /// Allocates this amount into `parts` using the process-wide major unit setting.
    ///
    /// See [`Money::allocate_with`].
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidParts` if `parts` is zero, or
    /// `MoneyError::TooManyParts` if the parts cannot be held in memory.
    pub fn allocate(self, parts: usize) -> MoneyResult<Vec<Self>> {
        self.allocate_with(parts, &Self::current_config())
    }

    /// Allocates this amount into `parts` whole-major-unit amounts.
    ///
    /// The parts sum to the major-unit portion of the amount. Extra major
    /// units from the remainder go to the earliest parts.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    /// use centum_shared::MoneyConfig;
    ///
    /// let parts = Money::new(3_500_000)
    ///     .allocate_with(3, &MoneyConfig::default())
    ///     .unwrap();
    /// assert_eq!(
    ///     parts,
    ///     vec![Money::new(1_166_700), Money::new(1_166_700), Money::new(1_166_600)]
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidParts` if `parts` is zero,
    /// `MoneyError::TooManyParts` if the parts cannot be held in memory, or
    /// `MoneyError::InvalidMajorUnitParts` if the config holds zero.
    pub fn allocate_with(self, parts: usize, config: &MoneyConfig) -> MoneyResult<Vec<Self>> {
        let allocated =
            AllocationUtil::allocate_major_units(self.amount(), parts, config.major_unit_parts)
                .inspect_err(|err| {
                    tracing::warn!(
                        amount = self.amount(),
                        parts,
                        error = %err,
                        "Allocation rejected"
                    );
                })?;

        tracing::debug!(
            amount = self.amount(),
            parts,
            major_unit_parts = config.major_unit_parts,
            "Allocated money"
        );
        Ok(allocated.into_iter().map(Self::new).collect())
    }
}
