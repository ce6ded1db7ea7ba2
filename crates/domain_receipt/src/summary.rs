//! Receipt-level rollup for display
//!
//! Collects claim progress, the aggregate charge rows, and the prorated
//! per-member totals into one snapshot a caller can render directly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{MemberId, Money};

use crate::charges::ReceiptCharges;
use crate::claim::{claimed_fraction, ItemClaim};
use crate::item::ReceiptItem;
use crate::prorate::{compute_member_totals, MemberReceiptTotal};

/// Claimed fraction at or above which an item counts as claimed
///
/// Slightly under 1 so that near-complete claims left short by fraction
/// rounding still read as done.
pub const SUMMARY_CLAIMED_THRESHOLD: Decimal = dec!(0.99);

/// Snapshot of a receipt's claim state and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    /// Claimable items with claimed fraction at the threshold or above
    pub claimed_item_count: usize,
    /// Claimable items still below the threshold
    pub unclaimed_item_count: usize,
    /// Sum of claimable item prices
    pub items_subtotal: Money,
    /// Tax row
    pub tax: Money,
    /// Tip row
    pub tip: Money,
    /// Service charge row
    pub service_charge: Money,
    /// Discount row (negative or zero)
    pub discount: Money,
    /// Declared total when present, otherwise the computed sum
    pub total: Money,
    /// Prorated totals for every claimant
    pub member_totals: Vec<MemberReceiptTotal>,
}

/// Builds a [`ReceiptSummary`] over the receipt's items and claims
pub fn generate_summary(
    charges: &ReceiptCharges,
    items: &[ReceiptItem],
    claims: &[ItemClaim],
    members: &[MemberId],
) -> ReceiptSummary {
    let currency = charges.currency;
    let mut claimed = 0usize;
    let mut unclaimed = 0usize;
    let mut subtotal = Decimal::ZERO;

    for item in items.iter().filter(|i| i.is_claimable()) {
        subtotal += item.price.amount();
        if claimed_fraction(item, claims) >= SUMMARY_CLAIMED_THRESHOLD {
            claimed += 1;
        } else {
            unclaimed += 1;
        }
    }

    let computed = subtotal
        + charges.tax.amount()
        + charges.tip.amount()
        + charges.service_charge.amount()
        + charges.discount.amount();
    let total = charges
        .declared_total
        .unwrap_or_else(|| Money::new(computed, currency).round_to_currency());

    debug!(claimed, unclaimed, %total, "summarizing receipt");

    ReceiptSummary {
        claimed_item_count: claimed,
        unclaimed_item_count: unclaimed,
        items_subtotal: Money::new(subtotal, currency),
        tax: charges.tax,
        tip: charges.tip,
        service_charge: charges.service_charge,
        discount: charges.discount,
        total,
        member_totals: compute_member_totals(charges, items, claims, members),
    }
}
