//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, MemberId, Money};
use domain_ledger::Balances;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating valid USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy()
        .prop_map(|amount| Money::from_minor(amount, Currency::USD))
}

/// Strategy for generating claim fractions in (0, 1]
pub fn fraction_strategy() -> impl Strategy<Value = Decimal> {
    (1u32..=10000u32).prop_map(|n| Decimal::new(n as i64, 4))
}

/// Strategy for generating split weights (1 to 100 parts)
pub fn weight_strategy() -> impl Strategy<Value = Decimal> {
    (1u32..100u32).prop_map(|n| Decimal::from(n))
}

/// Strategy for generating member rosters of 1 to 12 members
pub fn roster_strategy() -> impl Strategy<Value = Vec<MemberId>> {
    (1usize..=12usize).prop_map(|n| (0..n).map(|_| MemberId::new_v7()).collect())
}

/// Strategy for generating a closed-group USD balance map
///
/// Every member but the last gets a random signed amount of at least two
/// minor units; the last member offsets the sum so the map conserves to
/// zero, matching what charge derivation produces for a closed group.
pub fn closed_balances_strategy() -> impl Strategy<Value = Balances> {
    proptest::collection::vec((2i64..100_000i64, any::<bool>()), 1..10).prop_map(|entries| {
        let mut balances = Balances::new(Currency::USD);
        let mut running = 0i64;
        for (magnitude, negative) in entries {
            let minor = if negative { -magnitude } else { magnitude };
            running += minor;
            balances.set(MemberId::new_v7(), Money::from_minor(minor, Currency::USD));
        }
        balances.set(MemberId::new_v7(), Money::from_minor(-running, Currency::USD));
        balances
    })
}
