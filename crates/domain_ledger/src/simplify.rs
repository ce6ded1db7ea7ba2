//! Greedy debt simplification
//!
//! Reduces a many-party debt graph to pairwise settlement suggestions by
//! repeatedly matching the largest debtor against the largest creditor.
//! The result always zeroes every balance and never contains more than
//! `debtors + creditors - 1` suggestions, but it is a heuristic: finding
//! the true minimum number of transactions is a harder combinatorial
//! problem and deliberately out of scope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{MemberId, Money};

use crate::balance::Balances;

/// A suggested payment that moves the group toward settled
///
/// Ephemeral output: computed on demand from a balance snapshot, never
/// persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The member who should pay
    pub from_id: MemberId,
    /// The member who should receive
    pub to_id: MemberId,
    /// Suggested amount, at least one minor unit
    pub amount: Money,
}

/// Produces settlement suggestions that would zero every balance
///
/// Members within one minor unit of zero are treated as already settled
/// and excluded up front. Both sides are ordered by descending magnitude
/// (member id as tiebreak, so equal balances settle deterministically);
/// two cursors walk the lists, settling `min(debtor, creditor)` at each
/// step and advancing whichever side has fallen under one minor unit.
pub fn simplify(balances: &Balances) -> Vec<Settlement> {
    let currency = balances.currency();
    let threshold = Money::minor_unit(currency).amount();

    let mut debtors: Vec<(MemberId, Decimal)> = Vec::new();
    let mut creditors: Vec<(MemberId, Decimal)> = Vec::new();
    for (member_id, balance) in balances.entries() {
        let amount = balance.amount();
        if amount < -threshold {
            debtors.push((*member_id, -amount));
        } else if amount > threshold {
            creditors.push((*member_id, amount));
        }
    }

    debtors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        "simplifying debts"
    );

    let mut suggestions = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let settled = debtors[i].1.min(creditors[j].1);
        let amount = Money::new(settled, currency).round_to_currency();

        if amount.amount() >= threshold {
            suggestions.push(Settlement {
                from_id: debtors[i].0,
                to_id: creditors[j].0,
                amount,
            });
        }

        debtors[i].1 -= settled;
        creditors[j].1 -= settled;

        // min() drives at least one side under the threshold each round
        if debtors[i].1 < threshold {
            i += 1;
        }
        if creditors[j].1 < threshold {
            j += 1;
        }
    }

    suggestions
}
