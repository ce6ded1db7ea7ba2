//! Proration of aggregate charges across claimants
//!
//! Each claimant's share of tax, tip, service charge, and discount is
//! proportional to their claimed item subtotal over the total claimed
//! across all members. Shares are rounded independently, so a final
//! reconciliation pass pins the sum of grand totals to the receipt's
//! declared total when the gap is a plausible rounding artifact.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use core_kernel::{ItemId, MemberId, Money};

use crate::charges::ReceiptCharges;
use crate::claim::ItemClaim;
use crate::item::ReceiptItem;

/// Largest discrepancy the reconciliation pass will absorb
///
/// Gaps at or beyond this are assumed to be an upstream data problem
/// (mis-extracted total, missing line) rather than rounding, and are
/// left visible instead of being silently patched onto a member.
pub const RECONCILIATION_CAP: Decimal = dec!(0.10);

/// One claimed item's contribution to a member's subtotal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimedItemShare {
    /// The claimed item
    pub item_id: ItemId,
    /// Item description, carried for display
    pub description: String,
    /// Fraction of the item this member claimed
    pub fraction: Decimal,
    /// Rounded monetary value of the claim
    pub amount: Money,
}

/// A member's total for one receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberReceiptTotal {
    /// The claimant
    pub member_id: MemberId,
    /// Sum of the member's rounded claim amounts
    pub items_subtotal: Money,
    /// Proportional share of the tax row
    pub tax_share: Money,
    /// Proportional share of the tip row
    pub tip_share: Money,
    /// Proportional share of the service charge row
    pub service_charge_share: Money,
    /// Proportional share of the discount row (negative or zero)
    pub discount_share: Money,
    /// Subtotal plus every share, plus any reconciliation adjustment
    pub grand_total: Money,
    /// Per-item breakdown behind the subtotal
    pub claimed_items: Vec<ClaimedItemShare>,
}

/// Computes each claimant's receipt total
///
/// Members appear in the output in input order, and only if at least one
/// of their claims targets a claimable item. Claims against special rows
/// and expansion placeholders are ignored. With no claims at all the
/// result is empty.
///
/// When the receipt carries a declared total and the computed grand
/// totals miss it by less than [`RECONCILIATION_CAP`], the whole
/// discrepancy is added to the claimant with the largest grand total so
/// the output sums exactly to the receipt's authoritative figure.
pub fn compute_member_totals(
    charges: &ReceiptCharges,
    items: &[ReceiptItem],
    claims: &[ItemClaim],
    members: &[MemberId],
) -> Vec<MemberReceiptTotal> {
    debug!(
        items = items.len(),
        claims = claims.len(),
        members = members.len(),
        "prorating receipt"
    );
    let currency = charges.currency;
    let claimable: HashMap<ItemId, &ReceiptItem> = items
        .iter()
        .filter(|item| item.is_claimable())
        .map(|item| (item.id, item))
        .collect();

    // Pass 1: rounded per-claim amounts and each member's item subtotal
    let mut totals: Vec<MemberReceiptTotal> = Vec::new();
    let mut total_claimed = Decimal::ZERO;

    for member_id in members {
        let mut claimed_items = Vec::new();
        let mut subtotal = Money::zero(currency);

        for claim in claims.iter().filter(|c| &c.member_id == member_id) {
            let Some(item) = claimable.get(&claim.item_id) else {
                continue;
            };
            let amount = item.price.multiply(claim.fraction).round_to_currency();
            subtotal = Money::new(subtotal.amount() + amount.amount(), currency);
            claimed_items.push(ClaimedItemShare {
                item_id: item.id,
                description: item.description.clone(),
                fraction: claim.fraction,
                amount,
            });
        }

        if claimed_items.is_empty() {
            continue;
        }

        total_claimed += subtotal.amount();
        totals.push(MemberReceiptTotal {
            member_id: *member_id,
            items_subtotal: subtotal,
            tax_share: Money::zero(currency),
            tip_share: Money::zero(currency),
            service_charge_share: Money::zero(currency),
            discount_share: Money::zero(currency),
            grand_total: subtotal,
            claimed_items,
        });
    }

    // Pass 2: proportional, independently rounded aggregate shares
    for total in &mut totals {
        let proportion = if total_claimed.is_zero() {
            Decimal::ZERO
        } else {
            total.items_subtotal.amount() / total_claimed
        };

        total.tax_share = charges.tax.multiply(proportion).round_to_currency();
        total.tip_share = charges.tip.multiply(proportion).round_to_currency();
        total.service_charge_share = charges
            .service_charge
            .multiply(proportion)
            .round_to_currency();
        total.discount_share = charges.discount.multiply(proportion).round_to_currency();

        let grand = total.items_subtotal.amount()
            + total.tax_share.amount()
            + total.tip_share.amount()
            + total.service_charge_share.amount()
            + total.discount_share.amount();
        total.grand_total = Money::new(grand, currency);
    }

    reconcile(charges, &mut totals);
    totals
}

/// Pins the grand totals to the receipt's declared total when the gap
/// is under the cap, by adjusting the largest grand total
fn reconcile(charges: &ReceiptCharges, totals: &mut [MemberReceiptTotal]) {
    let Some(declared) = charges.declared_total else {
        return;
    };
    if totals.is_empty() {
        return;
    }

    let computed: Decimal = totals.iter().map(|t| t.grand_total.amount()).sum();
    let discrepancy = declared.amount() - computed;
    if discrepancy.is_zero() || discrepancy.abs() >= RECONCILIATION_CAP {
        return;
    }
    debug!(%discrepancy, "reconciling against declared total");

    // First claimant with the strictly largest grand total absorbs the gap
    let mut top = 0;
    for (i, total) in totals.iter().enumerate().skip(1) {
        if total.grand_total.amount() > totals[top].grand_total.amount() {
            top = i;
        }
    }
    totals[top].grand_total = Money::new(
        totals[top].grand_total.amount() + discrepancy,
        charges.currency,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn two_members() -> Vec<MemberId> {
        let mut ids = vec![MemberId::new(), MemberId::new()];
        ids.sort();
        ids
    }

    #[test]
    fn test_dinner_split_fifty_fifty() {
        let members = two_members();
        let dinner = ReceiptItem::new("Dinner", usd(dec!(30)));
        let charges = ReceiptCharges::new(Currency::USD)
            .with_tax(usd(dec!(2)))
            .with_tip(usd(dec!(4)));
        let claims = vec![
            ItemClaim::new(dinner.id, members[0], dec!(0.5)),
            ItemClaim::new(dinner.id, members[1], dec!(0.5)),
        ];

        let totals = compute_member_totals(&charges, &[dinner], &claims, &members);

        assert_eq!(totals.len(), 2);
        for total in &totals {
            assert_eq!(total.items_subtotal.amount(), dec!(15.00));
            assert_eq!(total.tax_share.amount(), dec!(1.00));
            assert_eq!(total.tip_share.amount(), dec!(2.00));
            assert_eq!(total.grand_total.amount(), dec!(18.00));
        }
    }

    #[test]
    fn test_discount_share_reduces_grand_total() {
        let members = two_members();
        let pizza = ReceiptItem::new("Pizza", usd(dec!(20)));
        let charges = ReceiptCharges::new(Currency::USD).with_discount(usd(dec!(-5)));
        let claims = vec![ItemClaim::new(pizza.id, members[0], dec!(1))];

        let totals = compute_member_totals(&charges, &[pizza], &claims, &members);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].discount_share.amount(), dec!(-5.00));
        assert_eq!(totals[0].grand_total.amount(), dec!(15.00));
    }

    #[test]
    fn test_special_rows_and_placeholders_ignored() {
        let members = two_members();
        let food = ReceiptItem::new("Burger", usd(dec!(10)));
        let tax_row = ReceiptItem::new("Tax", usd(dec!(1))).with_role(crate::item::ItemRole::Tax);
        let placeholder = ReceiptItem::new("Fries x2", usd(dec!(8))).with_quantity(dec!(0));
        let charges = ReceiptCharges::new(Currency::USD);
        let claims = vec![
            ItemClaim::new(food.id, members[0], dec!(1)),
            // Claims against rows that are not claimable must not count
            ItemClaim::new(tax_row.id, members[0], dec!(1)),
            ItemClaim::new(placeholder.id, members[0], dec!(1)),
        ];

        let totals =
            compute_member_totals(&charges, &[food, tax_row, placeholder], &claims, &members);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].items_subtotal.amount(), dec!(10.00));
        assert_eq!(totals[0].claimed_items.len(), 1);
    }

    #[test]
    fn test_members_without_claims_are_omitted() {
        let members = two_members();
        let food = ReceiptItem::new("Salad", usd(dec!(9)));
        let charges = ReceiptCharges::new(Currency::USD);
        let claims = vec![ItemClaim::new(food.id, members[0], dec!(1))];

        let totals = compute_member_totals(&charges, &[food], &claims, &members);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].member_id, members[0]);
    }

    #[test]
    fn test_no_claims_yields_empty_output() {
        let members = two_members();
        let food = ReceiptItem::new("Soup", usd(dec!(6)));
        let charges = ReceiptCharges::new(Currency::USD).with_tax(usd(dec!(1)));

        assert!(compute_member_totals(&charges, &[food], &[], &members).is_empty());
    }

    mod reconciliation {
        use super::*;

        #[test]
        fn test_small_discrepancy_lands_on_largest_total() {
            let members = two_members();
            let steak = ReceiptItem::new("Steak", usd(dec!(25)));
            let soda = ReceiptItem::new("Soda", usd(dec!(3)));
            // Thirds of tax produce independent rounding; the declared
            // total differs from the computed sum by a few cents
            let charges = ReceiptCharges::new(Currency::USD)
                .with_tax(usd(dec!(2.33)))
                .with_declared_total(usd(dec!(30.40)));
            let claims = vec![
                ItemClaim::new(steak.id, members[0], dec!(1)),
                ItemClaim::new(soda.id, members[1], dec!(1)),
            ];

            let totals = compute_member_totals(&charges, &[steak, soda], &claims, &members);

            let sum: Decimal = totals.iter().map(|t| t.grand_total.amount()).sum();
            assert_eq!(sum, dec!(30.40));
            // The steak claimant holds the larger total and absorbed the gap
            let steak_total = totals.iter().find(|t| t.member_id == members[0]).unwrap();
            let soda_total = totals.iter().find(|t| t.member_id == members[1]).unwrap();
            assert!(steak_total.grand_total.amount() > soda_total.grand_total.amount());
        }

        #[test]
        fn test_large_discrepancy_left_alone() {
            let members = two_members();
            let food = ReceiptItem::new("Curry", usd(dec!(12)));
            let charges = ReceiptCharges::new(Currency::USD)
                // A dollar off: upstream data problem, not rounding
                .with_declared_total(usd(dec!(13)));
            let claims = vec![ItemClaim::new(food.id, members[0], dec!(1))];

            let totals = compute_member_totals(&charges, &[food], &claims, &members);
            assert_eq!(totals[0].grand_total.amount(), dec!(12.00));
        }

        #[test]
        fn test_exact_match_needs_no_adjustment() {
            let members = two_members();
            let food = ReceiptItem::new("Ramen", usd(dec!(14)));
            let charges = ReceiptCharges::new(Currency::USD).with_declared_total(usd(dec!(14)));
            let claims = vec![ItemClaim::new(food.id, members[0], dec!(1))];

            let totals = compute_member_totals(&charges, &[food], &claims, &members);
            assert_eq!(totals[0].grand_total.amount(), dec!(14.00));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// With every item fully claimed by exactly one member, the
            /// member subtotals conserve the sum of item prices
            #[test]
            fn prop_full_claims_conserve_item_prices(
                cents in proptest::collection::vec(1i64..50_000i64, 1..12)
            ) {
                let members: Vec<MemberId> =
                    cents.iter().map(|_| MemberId::new()).collect();
                let items: Vec<ReceiptItem> = cents
                    .iter()
                    .map(|c| ReceiptItem::new("Item", Money::from_minor(*c, Currency::USD)))
                    .collect();
                let claims: Vec<ItemClaim> = items
                    .iter()
                    .zip(&members)
                    .map(|(item, member)| ItemClaim::new(item.id, *member, dec!(1)))
                    .collect();
                let charges = ReceiptCharges::new(Currency::USD);

                let totals = compute_member_totals(&charges, &items, &claims, &members);

                let claimed: Decimal =
                    totals.iter().map(|t| t.items_subtotal.amount()).sum();
                let priced: Decimal = items.iter().map(|i| i.price.amount()).sum();
                prop_assert_eq!(claimed, priced);
            }

            /// Each aggregate row's shares sum to the row within one minor
            /// unit per claimant (independent rounding)
            #[test]
            fn prop_tax_shares_near_tax_row(
                cents in proptest::collection::vec(100i64..50_000i64, 1..8),
                tax_cents in 0i64..10_000i64
            ) {
                let members: Vec<MemberId> =
                    cents.iter().map(|_| MemberId::new()).collect();
                let items: Vec<ReceiptItem> = cents
                    .iter()
                    .map(|c| ReceiptItem::new("Item", Money::from_minor(*c, Currency::USD)))
                    .collect();
                let claims: Vec<ItemClaim> = items
                    .iter()
                    .zip(&members)
                    .map(|(item, member)| ItemClaim::new(item.id, *member, dec!(1)))
                    .collect();
                let charges = ReceiptCharges::new(Currency::USD)
                    .with_tax(Money::from_minor(tax_cents, Currency::USD));

                let totals = compute_member_totals(&charges, &items, &claims, &members);

                let shares: Decimal = totals.iter().map(|t| t.tax_share.amount()).sum();
                let gap = (shares - charges.tax.amount()).abs();
                let bound = Decimal::from(totals.len() as i64) * dec!(0.01);
                prop_assert!(gap <= bound, "gap {} over bound {}", gap, bound);
            }

            /// A declared total within the cap is hit exactly
            #[test]
            fn prop_declared_total_within_cap_is_exact(
                cents in proptest::collection::vec(100i64..50_000i64, 1..8),
                offset in -9i64..=9i64
            ) {
                let members: Vec<MemberId> =
                    cents.iter().map(|_| MemberId::new()).collect();
                let items: Vec<ReceiptItem> = cents
                    .iter()
                    .map(|c| ReceiptItem::new("Item", Money::from_minor(*c, Currency::USD)))
                    .collect();
                let claims: Vec<ItemClaim> = items
                    .iter()
                    .zip(&members)
                    .map(|(item, member)| ItemClaim::new(item.id, *member, dec!(1)))
                    .collect();
                let computed: i64 = cents.iter().sum();
                let charges = ReceiptCharges::new(Currency::USD)
                    .with_declared_total(Money::from_minor(computed + offset, Currency::USD));

                let totals = compute_member_totals(&charges, &items, &claims, &members);

                let sum: Decimal = totals.iter().map(|t| t.grand_total.amount()).sum();
                prop_assert_eq!(sum, Money::from_minor(computed + offset, Currency::USD).amount());
            }
        }
    }
}
