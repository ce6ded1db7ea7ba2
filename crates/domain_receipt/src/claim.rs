//! Item claims and claim arithmetic
//!
//! A claim is a member's asserted fractional ownership of one line item.
//! Fractions live in (0, 1]; several members may claim the same item and
//! their fractions are expected to sum to at most 1, enforced only at
//! claim time through [`check_claim`] - the arithmetic functions tolerate
//! whatever they are handed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ItemId, MemberId, Money};

use crate::error::ClaimDenied;
use crate::item::ReceiptItem;

/// Tolerance around 1.0 when deciding whether an item is fully claimed
///
/// Wider than one minor unit on purpose: three members claiming thirds
/// record 0.3333 each, leaving a 0.0001-per-claim shortfall this band
/// absorbs.
pub const CLAIM_EPSILON: Decimal = dec!(0.002);

/// A member's fractional claim on one receipt item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemClaim {
    /// Unique identifier
    pub id: ClaimId,
    /// The claimed item
    pub item_id: ItemId,
    /// The claiming member
    pub member_id: MemberId,
    /// Fraction of the item claimed, in (0, 1]
    pub fraction: Decimal,
}

impl ItemClaim {
    /// Creates a new claim
    pub fn new(item_id: ItemId, member_id: MemberId, fraction: Decimal) -> Self {
        Self {
            id: ClaimId::new_v7(),
            item_id,
            member_id,
            fraction,
        }
    }
}

/// Sum of all claim fractions against an item; 0 if unclaimed
pub fn claimed_fraction(item: &ReceiptItem, claims: &[ItemClaim]) -> Decimal {
    claims
        .iter()
        .filter(|c| c.item_id == item.id)
        .map(|c| c.fraction)
        .sum()
}

/// The monetary value of all claims against an item; zero if unclaimed
pub fn claimed_amount(item: &ReceiptItem, claims: &[ItemClaim]) -> Money {
    item.price.multiply(claimed_fraction(item, claims))
}

/// The fraction of an item still open to claims, clamped at 0
pub fn remaining_fraction(item: &ReceiptItem, claims: &[ItemClaim]) -> Decimal {
    (Decimal::ONE - claimed_fraction(item, claims)).max(Decimal::ZERO)
}

/// Returns true if the item's claim fractions sum to 1.0 within
/// [`CLAIM_EPSILON`]
pub fn is_fully_claimed(item: &ReceiptItem, claims: &[ItemClaim]) -> bool {
    (Decimal::ONE - claimed_fraction(item, claims)).abs() <= CLAIM_EPSILON
}

/// What a successful claim check reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimOpening {
    /// Fraction of the item the member may still claim
    pub remaining_fraction: Decimal,
}

/// Checks whether a member may place a claim on an item
///
/// Denied for special-role rows and expansion placeholders, for a member
/// who already holds the item in full, and for an item other members have
/// already claimed completely. Success reports the fraction still open.
pub fn check_claim(
    item: &ReceiptItem,
    claims: &[ItemClaim],
    member_id: &MemberId,
) -> Result<ClaimOpening, ClaimDenied> {
    if item.role.is_special() {
        return Err(ClaimDenied::SpecialItem(item.role));
    }
    if !item.is_claimable() {
        return Err(ClaimDenied::ExpansionPlaceholder);
    }

    let own: Decimal = claims
        .iter()
        .filter(|c| c.item_id == item.id && &c.member_id == member_id)
        .map(|c| c.fraction)
        .sum();
    if own >= Decimal::ONE {
        return Err(ClaimDenied::AlreadyClaimedInFull);
    }

    let remaining = remaining_fraction(item, claims);
    if remaining <= CLAIM_EPSILON {
        return Err(ClaimDenied::FullyClaimed);
    }

    Ok(ClaimOpening {
        remaining_fraction: remaining,
    })
}
