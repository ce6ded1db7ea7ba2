//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the ledger
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Currency, MemberId, Money};
use domain_group::{Group, Member};
use domain_receipt::{ItemRole, ReceiptCharges, ReceiptItem};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates an amount that does not divide evenly three ways
    pub fn usd_uneven() -> Money {
        Money::new(dec!(100.01), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// Creates a JPY amount (zero decimal places)
    pub fn jpy_10000() -> Money {
        Money::new(dec!(10000), Currency::JPY)
    }

    /// Creates a sub-minor-unit dust amount
    pub fn usd_dust() -> Money {
        Money::new(dec!(0.005), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The night of the shared dinner every fixture revolves around
    pub fn dinner_night() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 20, 30, 0).unwrap()
    }

    /// A settle-up date a week after the dinner
    pub fn settle_up_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, 9, 0, 0).unwrap()
    }
}

/// A three-member group with stable, sorted member ids
pub struct TrioFixture {
    pub group: Group,
    pub alice: MemberId,
    pub bob: MemberId,
    pub carol: MemberId,
}

impl TrioFixture {
    /// Builds the Alice/Bob/Carol trio used across scenario tests
    ///
    /// Member ids are sorted so tests that rely on deterministic
    /// tie-breaking can reason about who comes first.
    pub fn new() -> Self {
        let mut ids = vec![MemberId::new_v7(), MemberId::new_v7(), MemberId::new_v7()];
        ids.sort();
        let (alice, bob, carol) = (ids[0], ids[1], ids[2]);

        let mut group = Group::new("Roommates", Currency::USD);
        for (id, name) in [(alice, "Alice"), (bob, "Bob"), (carol, "Carol")] {
            group
                .add_member(Member::with_id(id, name))
                .unwrap_or_else(|_| unreachable!("fresh ids cannot collide"));
        }

        Self {
            group,
            alice,
            bob,
            carol,
        }
    }

    /// All three member ids in roster order
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.group.member_ids()
    }
}

impl Default for TrioFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A scanned dinner receipt with items, special rows, and aggregates
pub struct DinnerReceiptFixture {
    pub items: Vec<ReceiptItem>,
    pub charges: ReceiptCharges,
}

impl DinnerReceiptFixture {
    /// Two entrees and a dessert, plus tax and tip rows, totaling 56.00
    pub fn new() -> Self {
        let items = vec![
            ReceiptItem::new("Dinner", Money::new(dec!(30.00), Currency::USD)),
            ReceiptItem::new("Wine", Money::new(dec!(14.00), Currency::USD)),
            ReceiptItem::new("Dessert", Money::new(dec!(6.00), Currency::USD)),
            ReceiptItem::new("Sales Tax", Money::new(dec!(2.00), Currency::USD))
                .with_role(ItemRole::Tax),
        ];
        let charges = ReceiptCharges::new(Currency::USD)
            .with_tax(Money::new(dec!(2.00), Currency::USD))
            .with_tip(Money::new(dec!(4.00), Currency::USD))
            .with_declared_total(Money::new(dec!(56.00), Currency::USD));

        Self { items, charges }
    }

    /// The dinner entree, largest claimable item
    pub fn dinner(&self) -> &ReceiptItem {
        &self.items[0]
    }

    /// The wine
    pub fn wine(&self) -> &ReceiptItem {
        &self.items[1]
    }

    /// The dessert
    pub fn dessert(&self) -> &ReceiptItem {
        &self.items[2]
    }
}

impl Default for DinnerReceiptFixture {
    fn default() -> Self {
        Self::new()
    }
}
