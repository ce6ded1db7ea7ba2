//! Split policy calculations
//!
//! The four policy functions are pure and infallible; re-running any of
//! them on the same input produces the same shares, which is what lets a
//! UI recompute a live preview as the user adjusts a selection. Input
//! problems a user should fix are reported by [`validate`] instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use core_kernel::{MemberId, Money, Rate};

use crate::error::SplitError;
use crate::instruction::SplitInstruction;
use crate::share::SplitShare;

/// Tolerance for the percent policy: percentages must sum to 100 within this
pub const PERCENT_EPSILON: Decimal = dec!(0.01);

/// Divides an amount evenly among the given members
///
/// Each share is rounded to the currency's minor unit; the cumulative
/// rounding remainder is added to the last member so the shares sum
/// exactly to the amount. An empty member list yields an empty split.
pub fn equal_split(amount: Money, members: &[MemberId]) -> Vec<SplitShare> {
    members
        .iter()
        .zip(amount.split_even(members.len()))
        .map(|(member_id, share)| SplitShare::new(*member_id, share))
        .collect()
}

/// Builds shares from caller-supplied exact amounts
///
/// Entries with a zero or negative amount are silently dropped; the rest
/// are rounded to the minor unit. This policy trusts the caller to have
/// supplied amounts that sum to the charge total and performs no
/// reconciliation of its own; [`validate`] is the place that checks.
pub fn exact_split(amounts: &[(MemberId, Money)]) -> Vec<SplitShare> {
    amounts
        .iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(member_id, amount)| SplitShare::new(*member_id, amount.round_to_currency()))
        .collect()
}

/// Divides an amount by per-member percentages
///
/// Members with a non-positive percentage are excluded. Every share is
/// `amount x percent / 100` rounded to the minor unit, and the last
/// participating member's share is then corrected so the split sums
/// exactly to the amount. When the percentages pass [`validate`] that
/// correction is at most the accumulated odd cents.
pub fn percent_split(amount: Money, percents: &[(MemberId, Decimal)]) -> Vec<SplitShare> {
    let participating: Vec<&(MemberId, Decimal)> = percents
        .iter()
        .filter(|(_, percent)| *percent > Decimal::ZERO)
        .collect();

    let Some((&&(last_id, _), rest)) = participating.split_last() else {
        return Vec::new();
    };

    let mut shares = Vec::with_capacity(participating.len());
    let mut allocated = Money::zero(amount.currency());

    for &&(member_id, percent) in rest {
        let share = Rate::from_percentage(percent)
            .apply(&amount)
            .round_to_currency();
        allocated = allocated + share;
        shares.push(SplitShare::new(member_id, share));
    }
    shares.push(SplitShare::new(last_id, amount - allocated));
    shares
}

/// Divides an amount proportionally to share weights
///
/// Members with a non-positive weight are excluded; the rest split the
/// amount in proportion to their weight over the total, with the rounding
/// remainder on the last weighted member. All-zero weights yield an
/// empty split.
pub fn shares_split(amount: Money, weights: &[(MemberId, Decimal)]) -> Vec<SplitShare> {
    let participating: Vec<&(MemberId, Decimal)> = weights
        .iter()
        .filter(|(_, weight)| *weight > Decimal::ZERO)
        .collect();

    let weight_values: Vec<Decimal> = participating.iter().map(|(_, w)| *w).collect();
    participating
        .iter()
        .zip(amount.allocate_by_weights(&weight_values))
        .map(|(&&(member_id, _), share)| SplitShare::new(member_id, share))
        .collect()
}

/// Dispatches to the policy named by the instruction
pub fn compute(amount: Money, instruction: &SplitInstruction) -> Vec<SplitShare> {
    debug!(policy = instruction.policy_name(), %amount, "computing split");
    match instruction {
        SplitInstruction::Equal { members } => equal_split(amount, members),
        SplitInstruction::Exact { amounts } => exact_split(amounts),
        SplitInstruction::Percent { percents } => percent_split(amount, percents),
        SplitInstruction::Shares { weights } => shares_split(amount, weights),
    }
}

/// Validates an instruction against the charge amount
///
/// This is the engine's only structured error channel for user-correctable
/// input: the split functions themselves never fail. Checks per policy:
///
/// - Equal: at least one member
/// - Exact: supplied amounts sum to the charge amount within one minor unit
/// - Percent: percentages sum to 100 within [`PERCENT_EPSILON`]
/// - Shares: total share weight is greater than zero
pub fn validate(amount: Money, instruction: &SplitInstruction) -> Result<(), SplitError> {
    match instruction {
        SplitInstruction::Equal { members } => {
            if members.is_empty() {
                return Err(SplitError::NoMembers);
            }
        }
        SplitInstruction::Exact { amounts } => {
            let mut total = Money::zero(amount.currency());
            for (_, entry) in amounts {
                total = total.checked_add(entry)?;
            }
            let gap = total.checked_sub(&amount)?.abs();
            if gap.amount() > Money::minor_unit(amount.currency()).amount() {
                return Err(SplitError::AmountMismatch {
                    expected: amount,
                    actual: total,
                });
            }
        }
        SplitInstruction::Percent { percents } => {
            let total: Decimal = percents.iter().map(|(_, p)| *p).sum();
            if (total - dec!(100)).abs() > PERCENT_EPSILON {
                return Err(SplitError::PercentTotal(total));
            }
        }
        SplitInstruction::Shares { weights } => {
            let total: Decimal = weights.iter().map(|(_, w)| *w).sum();
            if total <= Decimal::ZERO {
                return Err(SplitError::NoShareWeight);
            }
        }
    }
    Ok(())
}
