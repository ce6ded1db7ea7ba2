//! Owed-amount rows produced by the split policies

use serde::{Deserialize, Serialize};

use core_kernel::{MemberId, Money};

/// One member's owed portion of a charge
///
/// A list of these rows is the output of every split policy and the input
/// the ledger aggregator debits against each member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitShare {
    /// The member who owes this amount
    pub member_id: MemberId,
    /// The owed amount, rounded to the currency's minor unit
    pub amount: Money,
}

impl SplitShare {
    /// Creates a new share row
    pub fn new(member_id: MemberId, amount: Money) -> Self {
        Self { member_id, amount }
    }
}
