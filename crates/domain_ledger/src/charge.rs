//! Charge records
//!
//! A charge is a recorded expense: one payer, a total amount, and an
//! ordered breakdown of who owes what share. The split domain is the only
//! producer expected to guarantee that the breakdown sums to the total;
//! aggregation does not re-validate it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ChargeId, MemberId, Money};
use domain_split::SplitShare;

/// A recorded expense with a payer and an owed-amount breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Unique identifier
    pub id: ChargeId,
    /// The member who paid
    pub payer_id: MemberId,
    /// Human-readable description ("Dinner", "Taxi")
    pub description: String,
    /// Total charge amount
    pub amount: Money,
    /// Ordered owed-amount rows, normally produced by a split policy
    pub splits: Vec<SplitShare>,
    /// When the expense happened
    pub charge_date: DateTime<Utc>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Charge {
    /// Creates a new charge dated now
    pub fn new(
        payer_id: MemberId,
        description: impl Into<String>,
        amount: Money,
        splits: Vec<SplitShare>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ChargeId::new_v7(),
            payer_id,
            description: description.into(),
            amount,
            splits,
            charge_date: now,
            created_at: now,
        }
    }

    /// Sets the expense date
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.charge_date = date;
        self
    }

    /// Sums the owed amounts in the breakdown
    pub fn split_total(&self) -> Money {
        let total: Decimal = self.splits.iter().map(|s| s.amount.amount()).sum();
        Money::new(total, self.amount.currency())
    }

    /// Returns true if the breakdown sums to the charge amount within one
    /// minor unit
    ///
    /// Offered to callers that want to pre-validate; aggregation itself
    /// never checks.
    pub fn is_consistent(&self) -> bool {
        let gap = (self.split_total().amount() - self.amount.amount()).abs();
        gap <= Money::minor_unit(self.amount.currency()).amount()
    }
}
