//! Property-based tests for money operations.
//!
//! - Property 1: Truncation Toward Zero
//! - Property 2: Additive Laws
//! - Property 3: Comparison Total Order
//! - Property 4: Allocation Sum Invariant

use proptest::prelude::*;
use rust_decimal::Decimal;

use centum_shared::MoneyConfig;

use super::allocation::AllocationUtil;
use super::value::Money;

/// Strategy to generate amounts (-10,000,000.00 to 10,000,000.00 in cents).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate a Money value.
fn money() -> impl Strategy<Value = Money> {
    amount().prop_map(Money::new)
}

/// Strategy to generate fractional minor-unit values with 4 decimal places.
fn fractional_value() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate allocation count (1 to 100).
fn allocation_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Strategy to generate minor units per major unit.
fn major_unit_parts() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(100u32), Just(1000u32), 1u32..10_000]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Truncation Toward Zero
    // =========================================================================

    /// Property 1.1: Rounding never moves away from zero.
    ///
    /// *For any* fractional value, the rounded result SHALL have magnitude no
    /// greater than the input and lie within one unit of it.
    #[test]
    fn prop_round_truncates_toward_zero(value in fractional_value()) {
        let rounded = Decimal::from(Money::round(value).unwrap());
        prop_assert!(rounded.abs() <= value.abs());
        prop_assert!((value - rounded).abs() < Decimal::ONE);
        prop_assert!(rounded.is_zero() || rounded.is_sign_negative() == value.is_sign_negative());
    }

    /// Property 1.2: Construction round-trips whole amounts.
    #[test]
    fn prop_create_round_trip(m in money()) {
        let back = Money::create(Decimal::from(m.amount())).unwrap();
        prop_assert!(back.equal(m));
    }

    /// Property 1.3: Multiplying by one and dividing by one are identities.
    #[test]
    fn prop_mul_div_identity(m in money()) {
        prop_assert_eq!(m.mul(Decimal::ONE).unwrap(), m);
        prop_assert_eq!(m.div(Decimal::ONE).unwrap(), m);
    }

    /// Property 1.4: Dividing by an integer matches integer division.
    #[test]
    fn prop_div_by_integer_matches_integer_division(m in money(), d in 1i64..10_000) {
        let result = m.div(Decimal::from(d)).unwrap();
        prop_assert_eq!(result.amount(), m.amount() / d);
    }

    // =========================================================================
    // Property 2: Additive Laws
    // =========================================================================

    /// Property 2.1: Addition is commutative.
    #[test]
    fn prop_add_commutative(a in money(), b in money()) {
        prop_assert!(a.add(b).unwrap().equal(b.add(a).unwrap()));
    }

    /// Property 2.2: Addition is associative.
    #[test]
    fn prop_add_associative(a in money(), b in money(), c in money()) {
        let left = a.add(b).unwrap().add(c).unwrap();
        let right = a.add(b.add(c).unwrap()).unwrap();
        prop_assert!(left.equal(right));
    }

    /// Property 2.3: List addition is order independent.
    #[test]
    fn prop_add_list_order_independent(
        start in money(),
        list in prop::collection::vec(money(), 0..20),
    ) {
        let mut reversed = list.clone();
        reversed.reverse();
        prop_assert_eq!(start.add_list(&list).unwrap(), start.add_list(&reversed).unwrap());
    }

    /// Property 2.3b: Order independence holds near the `i64` bounds too.
    ///
    /// *For any* list, summing it forwards or backwards SHALL give the same
    /// outcome, including the same overflow verdict.
    #[test]
    fn prop_add_list_order_independent_full_range(
        start in any::<i64>().prop_map(Money::new),
        list in prop::collection::vec(any::<i64>().prop_map(Money::new), 0..6),
    ) {
        let mut reversed = list.clone();
        reversed.reverse();
        prop_assert_eq!(start.add_list(&list), start.add_list(&reversed));
        prop_assert_eq!(start.sub_list(&list), start.sub_list(&reversed));
    }

    /// Property 2.4: List subtraction equals subtracting the list total.
    #[test]
    fn prop_sub_list_equals_sub_of_total(
        start in money(),
        list in prop::collection::vec(money(), 0..20),
    ) {
        let total = Money::zero().add_list(&list).unwrap();
        prop_assert_eq!(start.sub_list(&list).unwrap(), start.sub(total).unwrap());
    }

    /// Property 2.5: Subtraction undoes addition.
    #[test]
    fn prop_sub_inverts_add(a in money(), b in money()) {
        prop_assert_eq!(a.add(b).unwrap().sub(b).unwrap(), a);
    }

    // =========================================================================
    // Property 3: Comparison Total Order
    // =========================================================================

    /// Property 3.1: Exactly one of less, equal, more holds.
    #[test]
    fn prop_trichotomy(a in money(), b in money()) {
        let held = [a.less(b), a.equal(b), a.more(b)]
            .iter()
            .filter(|x| **x)
            .count();
        prop_assert_eq!(held, 1);
    }

    /// Property 3.2: Inclusive comparisons are unions of strict ones.
    #[test]
    fn prop_inclusive_comparisons(a in money(), b in money()) {
        prop_assert_eq!(a.equal_or_less(b), a.less(b) || a.equal(b));
        prop_assert_eq!(a.equal_or_more(b), a.more(b) || a.equal(b));
    }

    /// Property 3.3: Named comparisons agree with `Ord`.
    #[test]
    fn prop_comparisons_agree_with_ord(a in money(), b in money()) {
        prop_assert_eq!(a.less(b), a < b);
        prop_assert_eq!(a.more(b), a > b);
        prop_assert_eq!(a.equal(b), a == b);
    }

    // =========================================================================
    // Property 4: Allocation Sum Invariant
    // =========================================================================

    /// Property 4.1: Parts sum to the major-unit portion of the amount.
    #[test]
    fn prop_allocate_sum_invariant(
        total in amount(),
        count in allocation_count(),
        mup in major_unit_parts(),
    ) {
        let result = AllocationUtil::allocate_major_units(total, count, mup).unwrap();
        let unit = i64::from(mup);
        let sum: i64 = result.iter().sum();
        prop_assert_eq!(sum, total / unit * unit);
    }

    /// Property 4.2: Allocation produces exactly `count` parts.
    #[test]
    fn prop_allocate_correct_count(
        total in amount(),
        count in allocation_count(),
        mup in major_unit_parts(),
    ) {
        let result = AllocationUtil::allocate_major_units(total, count, mup).unwrap();
        prop_assert_eq!(result.len(), count);
    }

    /// Property 4.3: Every part is a whole number of major units.
    #[test]
    fn prop_allocate_whole_major_units(
        total in amount(),
        count in allocation_count(),
        mup in major_unit_parts(),
    ) {
        let result = AllocationUtil::allocate_major_units(total, count, mup).unwrap();
        let unit = i64::from(mup);
        for (i, part) in result.iter().enumerate() {
            prop_assert_eq!(part % unit, 0, "Part {} = {} is not whole", i, part);
        }
    }

    /// Property 4.4: Parts differ by at most one major unit, larger magnitude first.
    #[test]
    fn prop_allocate_fair_and_front_loaded(
        total in amount(),
        count in allocation_count(),
        mup in major_unit_parts(),
    ) {
        let result = AllocationUtil::allocate_major_units(total, count, mup).unwrap();
        let unit = i64::from(mup);
        for pair in result.windows(2) {
            prop_assert!(pair[0].abs() >= pair[1].abs());
        }
        let first = result[0];
        let last = result[result.len() - 1];
        prop_assert!((first - last).abs() <= unit);
    }

    /// Property 4.5: `Money::allocate_with` agrees with the utility.
    #[test]
    fn prop_money_allocate_matches_util(
        m in money(),
        count in allocation_count(),
        mup in major_unit_parts(),
    ) {
        let config = MoneyConfig::new(mup).unwrap();
        let parts: Vec<i64> = m
            .allocate_with(count, &config)
            .unwrap()
            .into_iter()
            .map(Money::amount)
            .collect();
        let expected = AllocationUtil::allocate_major_units(m.amount(), count, mup).unwrap();
        prop_assert_eq!(parts, expected);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    // =========================================================================
    // Property 1: Truncation - Specific Examples
    // =========================================================================

    /// Specific example: 99.99 rounds to 99.
    #[test]
    fn test_truncation_positive() {
        assert_eq!(Money::round(dec!(99.99)).unwrap(), 99);
    }

    /// Specific example: -99.99 rounds to -99 (not -100).
    #[test]
    fn test_truncation_negative() {
        assert_eq!(Money::round(dec!(-99.99)).unwrap(), -99);
    }

    // =========================================================================
    // Property 4: Allocation Sum Invariant - Specific Examples
    // =========================================================================

    /// Specific example: 35,000.00 / 3 = [11,667.00, 11,667.00, 11,666.00].
    #[test]
    fn test_allocate_35000_by_3() {
        let result = AllocationUtil::allocate_major_units(3_500_000, 3, 100).unwrap();
        assert_eq!(result, vec![1_166_700, 1_166_700, 1_166_600]);
        assert_eq!(result.iter().sum::<i64>(), 3_500_000);
    }

    /// Specific example: 1.00 / 3 = [1.00, 0.00, 0.00].
    #[test]
    fn test_allocate_1_by_3() {
        let result = AllocationUtil::allocate_major_units(100, 3, 100).unwrap();
        assert_eq!(result, vec![100, 0, 0]);
    }
}
