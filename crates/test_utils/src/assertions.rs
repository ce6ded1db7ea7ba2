//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_ledger::Balances;
use domain_split::SplitShare;
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more
/// than the tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a breakdown's amounts sum exactly to the expected total
pub fn assert_sums_to(shares: &[SplitShare], expected: Money) {
    let total: Decimal = shares.iter().map(|s| s.amount.amount()).sum();
    assert_eq!(
        total,
        expected.amount(),
        "Shares sum to {} but expected {}",
        total,
        expected.amount()
    );
}

/// Asserts that every balance is within the settled threshold of zero
pub fn assert_balances_settled(balances: &Balances) {
    assert!(
        balances.entries().all(|(id, _)| balances.is_settled(id)),
        "Balances are not settled: {:?}",
        balances
            .entries()
            .map(|(id, amount)| (*id, amount.amount()))
            .collect::<Vec<_>>()
    );
}

/// Asserts that balances sum to zero, the ledger conservation invariant
pub fn assert_balances_conserved(balances: &Balances) {
    let total = balances.total();
    assert!(
        total.is_zero(),
        "Balances do not sum to zero: total={}",
        total.amount()
    );
}
