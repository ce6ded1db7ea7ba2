//! Net balance derivation
//!
//! A member's balance is (total paid) minus (total owed across all
//! charges), adjusted by direct payments. Positive means the member is
//! owed money; negative means the member owes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, MemberId, Money};

use crate::charge::Charge;
use crate::payment::Payment;

/// A signed balance per member, all in one currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balances {
    currency: Currency,
    amounts: HashMap<MemberId, Money>,
}

impl Balances {
    /// Creates an empty balance map
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            amounts: HashMap::new(),
        }
    }

    /// Creates a balance map with every member zeroed
    pub fn zeroed(members: &[MemberId], currency: Currency) -> Self {
        let amounts = members
            .iter()
            .map(|id| (*id, Money::zero(currency)))
            .collect();
        Self { currency, amounts }
    }

    /// Returns the currency of this balance map
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns a member's balance, zero if the member is unknown
    pub fn get(&self, member_id: &MemberId) -> Money {
        self.amounts
            .get(member_id)
            .copied()
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Overwrites a member's balance
    pub fn set(&mut self, member_id: MemberId, amount: Money) {
        self.amounts.insert(member_id, amount);
    }

    /// Adds a signed amount to a member's balance, creating the entry
    /// on first touch
    pub fn apply(&mut self, member_id: MemberId, delta: Money) {
        let entry = self
            .amounts
            .entry(member_id)
            .or_insert_with(|| Money::zero(self.currency));
        *entry = Money::new(entry.amount() + delta.amount(), self.currency);
    }

    /// Iterates over (member, balance) entries
    pub fn entries(&self) -> impl Iterator<Item = (&MemberId, &Money)> {
        self.amounts.iter()
    }

    /// Number of members tracked
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no members are tracked
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Sum of all balances; zero in a closed group
    pub fn total(&self) -> Money {
        let total = self.amounts.values().map(|m| m.amount()).sum();
        Money::new(total, self.currency)
    }

    /// Returns true if the member's balance is within one minor unit of zero
    pub fn is_settled(&self, member_id: &MemberId) -> bool {
        self.get(member_id).abs().amount() <= Money::minor_unit(self.currency).amount()
    }
}

/// Derives net balances from a charge history
///
/// For each charge the payer is credited the full amount and every split
/// row's member is debited their owed amount. No validation or
/// deduplication is performed; inputs are trusted.
pub fn compute_balances(
    charges: &[Charge],
    members: &[MemberId],
    currency: Currency,
) -> Balances {
    debug!(
        charges = charges.len(),
        members = members.len(),
        "computing balances"
    );
    let mut balances = Balances::zeroed(members, currency);

    for charge in charges {
        balances.apply(charge.payer_id, charge.amount);
        for split in &charge.splits {
            balances.apply(split.member_id, -split.amount);
        }
    }

    balances
}

/// Derives net balances from charges, then applies direct payments
///
/// Each payment increases the payer's balance and decreases the
/// receiver's by the same amount, independently and cumulatively. A
/// payment exceeding what was owed flips the sign of the relationship;
/// that is intended behavior, not a defect.
pub fn compute_balances_with_payments(
    charges: &[Charge],
    payments: &[Payment],
    members: &[MemberId],
    currency: Currency,
) -> Balances {
    let mut balances = compute_balances(charges, members, currency);

    for payment in payments {
        balances.apply(payment.from_id, payment.amount);
        balances.apply(payment.to_id, -payment.amount);
    }

    balances
}
